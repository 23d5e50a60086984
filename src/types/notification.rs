/// A recurring daily notification, handed to the platform backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyNotification {
    pub title: String,
    /// Notification body; for the daily reminder this is the bookmarked URL.
    pub body: String,
    /// Epoch ms of the first delivery. Repeats daily afterwards.
    pub first_trigger_at: i64,
}
