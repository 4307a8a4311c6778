#[cfg(test)]
mod tests {
    use crate::core::api::{ApiError, error_from_response};
    use crate::core::otp::{CellEdit, OtpError, OtpPhase, OtpSession, Tick};
    use crate::core::storage::{
        CSRF_TOKEN_KEY, KeyValueStore, MemoryStore, OTP_COUNTDOWN_KEY, OTP_LAST_SENT_KEY,
        THEME_KEY, store_csrf_token,
    };
    use crate::core::{Liveness, Theme, ThemeStore};

    const NOW: i64 = 1_760_000_000_000;

    fn stored_at(ms: i64) -> MemoryStore {
        let store = MemoryStore::new();
        store.set(OTP_LAST_SENT_KEY, &ms.to_string());
        store.set(CSRF_TOKEN_KEY, "challenge-7");
        store
    }

    #[test]
    fn test_remount_resumes_cooldown_from_timestamp() {
        let store = stored_at(NOW - 45_000);
        let session = OtpSession::mount(store, None, NOW);

        assert_eq!(session.countdown_secs(), 15);
        assert!(!session.can_resend());
        assert_eq!(session.csrf_token(), Some("challenge-7"));
    }

    #[test]
    fn test_countdown_key_is_advisory_only() {
        let store = stored_at(NOW - 10_000);
        store.set(OTP_COUNTDOWN_KEY, "3");
        let session = OtpSession::mount(store, None, NOW);
        assert_eq!(session.countdown_secs(), 50);
    }

    #[test]
    fn test_can_resend_matches_countdown_through_full_cycle() {
        let store = stored_at(NOW - 50_000);
        let mut session = OtpSession::mount(store, None, NOW);

        let mut now = NOW;
        while session.countdown_secs() > 0 {
            assert!(!session.can_resend());
            now += 1_000;
            session.tick(now);
        }
        assert_eq!(now, NOW + 10_000);
        assert!(session.can_resend());
        assert_eq!(session.tick(now), Tick::Idle);

        session.begin_resend(now).unwrap();
        assert_eq!(session.can_resend(), session.countdown_secs() == 0);
        session.finish_resend(Ok(())).unwrap();
        assert_eq!(session.can_resend(), session.countdown_secs() == 0);
    }

    #[test]
    fn test_five_digits_never_produce_a_request() {
        let mut session = OtpSession::mount(stored_at(NOW), None, NOW);
        session.apply_edit(CellEdit::Paste("12345".into()));

        assert!(!session.can_submit());
        assert_eq!(session.begin_verify(), Err(OtpError::IncompleteCode));
        assert_eq!(session.phase(), OtpPhase::Entering);
    }

    #[test]
    fn test_stale_resend_rejected_locally() {
        // A second click ten seconds after a successful resend
        let mut session = OtpSession::mount(stored_at(NOW - 70_000), None, NOW);
        assert!(session.can_resend());
        session.begin_resend(NOW).unwrap();
        session.finish_resend(Ok(())).unwrap();
        assert_eq!(session.tick(NOW + 10_000), Tick::Running(50));

        let err = session.begin_resend(NOW + 10_000).unwrap_err();
        assert_eq!(err, OtpError::CooldownActive { remaining_secs: 50 });
        assert!(session.error().unwrap().contains("wait 50 seconds"));
        assert!(!session.is_resending());
    }

    #[test]
    fn test_verify_failure_surfaces_server_message() {
        let mut session = OtpSession::mount(stored_at(NOW), None, NOW);
        for (index, digit) in "482913".chars().enumerate() {
            session.apply_edit(CellEdit::Input {
                index,
                value: digit.to_string(),
            });
        }

        session.begin_verify().unwrap();
        let failure = error_from_response(400, r#"{"message":"Invalid code"}"#);
        session.finish_verify(Err(failure));

        assert_eq!(session.error(), Some("Invalid code"));
        assert_eq!(session.phase(), OtpPhase::Entering);
    }

    #[test]
    fn test_continuation_after_teardown_is_dropped() {
        let mut session = OtpSession::mount(stored_at(NOW), None, NOW);
        session.apply_edit(CellEdit::Paste("111111".into()));
        session.begin_verify().unwrap();

        let liveness = Liveness::new();
        let continuation = liveness.clone();
        liveness.invalidate();

        let applied = continuation.guard(|| session.finish_verify(Ok(())));
        assert!(applied.is_none());
        assert_eq!(session.phase(), OtpPhase::Submitting);
    }

    #[test]
    fn test_resend_failure_is_not_refunded() {
        let store = stored_at(NOW - 61_000);
        let mut session = OtpSession::mount(store.clone(), None, NOW);
        session.begin_resend(NOW).unwrap();
        let _ = session.finish_resend(Err(ApiError::Network("reset".into())));

        let remounted = OtpSession::mount(store, None, NOW + 1_000);
        assert_eq!(remounted.countdown_secs(), 59);
    }

    #[test]
    fn test_theme_toggle_twice_restores_and_persists() {
        let store = MemoryStore::with_entries([(THEME_KEY, "dark")]);
        let themes = ThemeStore::new(store.clone());

        let original = themes.resolve(Some(false));
        assert_eq!(original, Theme::Dark);

        let once = themes.toggle(original);
        let twice = themes.toggle(once);

        assert_eq!(twice, original);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some(original.as_str()));
        assert_eq!(ThemeStore::new(store).resolve(None), original);
    }

    #[test]
    fn test_login_without_token_does_not_reuse_previous_one() {
        let store = stored_at(NOW - 300_000);
        store_csrf_token(&store, None);

        let mut session = OtpSession::mount(store, None, NOW);
        assert_eq!(session.csrf_token(), None);
        session.apply_edit(CellEdit::Paste("482913".into()));
        assert_eq!(session.begin_verify(), Err(OtpError::MissingCsrfToken));
    }
}
