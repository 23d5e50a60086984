// Markd app services
// Process-local concerns around the shared collections: subscription/trial
// gating, daily reminder scheduling, and the purchase integration boundary.

pub mod notification_scheduler;
pub mod purchase_service;
pub mod subscription_service;
