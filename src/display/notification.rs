//! Notification display formatting

use crate::models::Notification;

/// Format notifications oldest-first, one per line
pub fn format_notification_list<'a, I>(notifications: I, date_format: &str) -> String
where
    I: IntoIterator<Item = &'a Notification>,
{
    let mut output = String::new();

    for n in notifications {
        if output.is_empty() {
            output.push_str("Notifications:\n");
        }
        output.push_str(&format!(
            "[{}] {}\n",
            n.timestamp.format(date_format),
            n.message
        ));
    }

    if output.is_empty() {
        return "No notifications available.\n".to_string();
    }

    output
}
