//! Notification message builders.
//!
//! User-facing texts match the upstream review service wording exactly, so
//! they stay in Russian; everything the operator sees goes through `log`.

use crate::tracker::StatusChange;

/// Message for a homework whose review status moved.
pub fn status_change(change: &StatusChange) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        change.homework,
        change.status.verdict()
    )
}

/// Message for a failed polling cycle, reported through the same chat.
pub fn failure(error: impl std::fmt::Display) -> String {
    format!("Сбой в работе программы: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwbot_rust_core::models::HomeworkStatus;

    #[test]
    fn test_status_change_text() {
        let change = StatusChange {
            homework: "hw1".to_string(),
            status: HomeworkStatus::Approved,
            previous: Some(HomeworkStatus::Reviewing),
        };
        assert_eq!(
            status_change(&change),
            "Изменился статус проверки работы \"hw1\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_rejected_text() {
        let change = StatusChange {
            homework: "final project".to_string(),
            status: HomeworkStatus::Rejected,
            previous: None,
        };
        assert_eq!(
            status_change(&change),
            "Изменился статус проверки работы \"final project\". \
             Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_failure_text() {
        assert_eq!(
            failure("review API returned status 503"),
            "Сбой в работе программы: review API returned status 503"
        );
    }
}
