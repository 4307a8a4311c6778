//! OTP verification page
//!
//! Owns the [`OtpSession`] for the lifetime of the view, drives its one
//! second cool-down timer and performs the verify and resend requests.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::Liveness;
use crate::core::api::{RESEND_OTP_PATH, VERIFY_OTP_PATH};
use crate::core::otp::{CellEdit, EditOutcome, OtpPhase, OtpSession};
use crate::ui::api;
use crate::ui::auth::{AuthLayout, OtpInput, use_verification_handoff};
use crate::ui::browser::{BrowserStorage, now_ms};
use crate::ui::common::{Button, ButtonVariant, ErrorMessage};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn OtpPage() -> impl IntoView {
    let navigate = use_navigate();
    let handoff = use_verification_handoff();

    let session = RwSignal::new(OtpSession::mount(BrowserStorage, handoff.take(), now_ms()));

    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.invalidate()
    });

    // Countdown ticker, dropped with the view
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::Interval;

        let ticker = StoredValue::new_local(None::<Interval>);
        Effect::new(move |_| {
            let interval = Interval::new(1_000, move || {
                if session.with_untracked(|s| s.countdown_secs() > 0) {
                    session.try_update(|s| s.tick(now_ms()));
                }
            });
            ticker.set_value(Some(interval));
        });
        on_cleanup(move || {
            ticker.try_update_value(Option::take);
        });
    }

    let cells = Memo::new(move |_| session.with(|s| s.cells().clone()));
    let on_edit = Callback::new(move |edit: CellEdit| {
        session
            .try_update(|s| s.apply_edit(edit))
            .unwrap_or(EditOutcome::Rejected)
    });

    let on_submit = {
        let liveness = liveness.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            let Some(Ok(call)) = session.try_update(|s| s.begin_verify()) else {
                return;
            };

            let liveness = liveness.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let result =
                    api::post_ack(VERIFY_OTP_PATH, Some(call.csrf_token.as_str()), Some(&call.body)).await;
                if let Err(err) = &result {
                    leptos::logging::warn!("OTP verification failed: {}", err);
                }

                let phase = liveness
                    .guard(|| session.try_update(|s| s.finish_verify(result)))
                    .flatten();
                if phase == Some(OtpPhase::Verified) {
                    leptos::logging::log!("OTP verified");
                    navigate("/dashboard", Default::default());
                }
            });
        }
    };

    let on_resend = Callback::new(move |_: ()| {
        let Some(Ok(call)) = session.try_update(|s| s.begin_resend(now_ms())) else {
            return;
        };

        let liveness = liveness.clone();
        spawn_local(async move {
            let result = api::post_ack::<()>(RESEND_OTP_PATH, Some(call.csrf_token.as_str()), None).await;
            if let Err(err) = &result {
                leptos::logging::error!("Failed to resend OTP: {}", err);
            }
            liveness.guard(|| session.try_update(|s| s.finish_resend(result)));
        });
    });

    let error = Signal::derive(move || session.with(|s| s.error().map(str::to_string)));
    let submitting = Signal::derive(move || session.with(|s| s.phase() == OtpPhase::Submitting));
    let submit_disabled = Signal::derive(move || !session.with(|s| s.can_submit()));
    let resending = Signal::derive(move || session.with(|s| s.is_resending()));
    let resend_disabled = Signal::derive(move || !session.with(|s| s.resend_enabled()));

    view! {
        <AuthLayout
            title="Verify Your Identity"
            subtitle="Enter the 6-digit code we sent to your email"
        >
            <form on:submit=on_submit class="space-y-6">
                <OtpInput
                    cells=cells
                    on_edit=on_edit
                    disabled=Signal::derive(move || session.with(|s| s.is_busy()))
                />

                <ErrorMessage error=error />

                <Button
                    button_type="submit"
                    full_width=true
                    loading=submitting
                    disabled=submit_disabled
                >
                    {move || if submitting.get() { "Verifying..." } else { "Verify" }}
                </Button>
            </form>

            <div class="mt-6 space-y-3 text-center">
                <p class="countdown" aria-live="polite">
                    <Icon name=icons::CLOCK class="w-4 h-4" />
                    <span>{move || session.with(|s| s.countdown_label())}</span>
                </p>
                <Button
                    variant=ButtonVariant::Outline
                    full_width=true
                    on_click=on_resend
                    loading=resending
                    disabled=resend_disabled
                >
                    "Resend OTP"
                </Button>
                <A href="/" attr:class="link text-sm">
                    "Back to sign in"
                </A>
            </div>
        </AuthLayout>
    }
}
