use crate::api::{ApiError, ApiResult};
use crate::notify::NotificationCenter;
use crate::overlay::{Overlay, OverlayController};
use crate::tokens::RequestToken;
use crate::types::Notification;

pub const DELETING_NOTICE: &str = "Deleting your account...";
pub const DELETED_NOTICE: &str = "Account deleted successfully";
pub const DELETE_FAILED_NOTICE: &str = "Failed to delete account";
pub const DELETE_ERROR_NOTICE: &str = "An error occurred while deleting the account";
pub const REDIRECT_DELAY_MS: u64 = 1500;
pub const REDIRECT_PATH: &str = "/";

pub fn deleting_notice() -> Notification {
    Notification::info(DELETING_NOTICE)
}

/// Everything a confirmed deletion does before the request goes out: the
/// "deleting" notice is shown and the confirmation modal is closed. Returns
/// the notice's token so its dismissal can be scheduled.
pub fn begin_deletion(
    overlays: &mut OverlayController,
    notices: &mut NotificationCenter,
) -> RequestToken {
    overlays.close(Overlay::DeleteAccount);
    notices.show(deleting_notice())
}

/// Notification for a finished delete request. A refusal shows the server's
/// reason when it gave one; transport failures stay generic.
pub fn deletion_outcome_notice(result: &ApiResult<()>) -> Notification {
    match result {
        Ok(()) => Notification::success(DELETED_NOTICE),
        Err(err @ ApiError::Rejected(_)) => Notification::error(
            err.server_message()
                .unwrap_or(DELETE_FAILED_NOTICE)
                .to_string(),
        ),
        Err(_) => Notification::error(DELETE_ERROR_NOTICE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NotificationKind;
    use reqwest::StatusCode;

    #[test]
    fn begin_deletion_closes_confirmation_and_announces() {
        let mut overlays = OverlayController::default();
        let mut notices = NotificationCenter::default();
        overlays.open(Overlay::DeleteAccount);

        begin_deletion(&mut overlays, &mut notices);

        assert!(!overlays.is_open(Overlay::DeleteAccount));
        assert_eq!(overlays.open_modal(), None);
        let notice = notices.current().unwrap();
        assert_eq!(notice.message, DELETING_NOTICE);
        assert_eq!(notice.kind, NotificationKind::Info);
    }

    #[test]
    fn success_notice() {
        let notice = deletion_outcome_notice(&Ok(()));
        assert_eq!(notice.kind, NotificationKind::Success);
        assert_eq!(notice.message, DELETED_NOTICE);
    }

    #[test]
    fn refusal_prefers_server_reason() {
        let with_reason =
            deletion_outcome_notice(&Err(ApiError::Rejected(Some("Not logged in".into()))));
        assert_eq!(with_reason.message, "Not logged in");

        let without = deletion_outcome_notice(&Err(ApiError::Rejected(None)));
        assert_eq!(without.message, DELETE_FAILED_NOTICE);
    }

    #[test]
    fn transport_failure_is_generic() {
        let notice = deletion_outcome_notice(&Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
        assert_eq!(notice.kind, NotificationKind::Error);
        assert_eq!(notice.message, DELETE_ERROR_NOTICE);
    }
}
