use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsValue;
use yew::prelude::*;

/// Launch date shown on the landing page, in browser-local time.
pub const LAUNCH_DATE: &str = "2026-04-05T00:00:00";

/// Time remaining until launch. Days are folded into the hour count, so the
/// page shows e.g. "52 hours" rather than "2 days, 4 hours".
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TimeLeft {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    /// Floor-decomposes a millisecond difference. Differences at or past the
    /// target clamp to zero; negative values never surface.
    pub fn from_millis(diff: f64) -> Self {
        if diff <= 0.0 {
            return Self::default();
        }
        let total_seconds = (diff / 1000.0).floor() as u64;
        Self {
            hours: total_seconds / 3600,
            minutes: (total_seconds / 60) % 60,
            seconds: total_seconds % 60,
        }
    }

    pub fn is_over(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

fn millis_until_launch() -> f64 {
    let launch = js_sys::Date::new(&JsValue::from_str(LAUNCH_DATE));
    launch.get_time() - js_sys::Date::now()
}

#[function_component(CountdownTimer)]
pub fn countdown_timer() -> Html {
    let time_left = use_state(|| TimeLeft::from_millis(millis_until_launch()));

    {
        let time_left = time_left.clone();
        use_effect_with_deps(
            move |_| {
                let interval_handle = Rc::new(RefCell::new(None));
                let interval_handle_clone = interval_handle.clone();
                // A page opened after launch never schedules a tick.
                if !time_left.is_over() {
                    let interval = Interval::new(1000, move || {
                        // Recompute from the wall clock each tick so missed
                        // ticks self-correct instead of drifting.
                        let next = TimeLeft::from_millis(millis_until_launch());
                        if next.is_over() {
                            if let Some(interval) = interval_handle.borrow_mut().take() {
                                drop(interval);
                            }
                        }
                        time_left.set(next);
                    });
                    *interval_handle_clone.borrow_mut() = Some(interval);
                }
                move || {
                    if let Some(interval) = interval_handle_clone.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            (),
        );
    }

    let countdown_css = r#"
        .countdown {
            display: flex;
            justify-content: center;
            gap: 1.5rem;
        }
        .countdown-block {
            display: flex;
            flex-direction: column;
            align-items: center;
        }
        .countdown-value {
            width: 80px;
            height: 80px;
            display: flex;
            align-items: center;
            justify-content: center;
            background: #1a1713;
            border: 1px solid rgba(212, 168, 75, 0.25);
            border-radius: 10px;
            box-shadow: 0 0 30px rgba(212, 168, 75, 0.08);
            font-family: 'Playfair Display', serif;
            font-size: 2rem;
            font-weight: 700;
            color: #d4a84b;
        }
        .countdown-label {
            margin-top: 0.6rem;
            font-size: 0.75rem;
            letter-spacing: 0.15em;
            text-transform: uppercase;
            color: #a89f8f;
        }
        @media (max-width: 768px) {
            .countdown {
                gap: 0.75rem;
            }
            .countdown-value {
                width: 64px;
                height: 64px;
                font-size: 1.5rem;
            }
        }
    "#;

    let blocks = [
        ("Hours", time_left.hours),
        ("Minutes", time_left.minutes),
        ("Seconds", time_left.seconds),
    ];

    html! {
        <div class="countdown">
            { blocks.iter().map(|(label, value)| html! {
                <div class="countdown-block" key={*label}>
                    <span class="countdown-value">{ format!("{:02}", value) }</span>
                    <span class="countdown-label">{ *label }</span>
                </div>
            }).collect::<Html>() }
            <style>{countdown_css}</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_hour_before_launch() {
        // target 2026-04-05T00:00:00, now 2026-04-04T23:00:00
        assert_eq!(
            TimeLeft::from_millis(3_600_000.0),
            TimeLeft {
                hours: 1,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn folds_days_into_hours() {
        let diff = ((48 * 3600 + 23 * 60 + 7) * 1000) as f64;
        assert_eq!(
            TimeLeft::from_millis(diff),
            TimeLeft {
                hours: 48,
                minutes: 23,
                seconds: 7
            }
        );
    }

    #[test]
    fn floors_partial_seconds() {
        assert_eq!(
            TimeLeft::from_millis(61_999.0),
            TimeLeft {
                hours: 0,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn clamps_at_and_past_the_target() {
        assert_eq!(TimeLeft::from_millis(0.0), TimeLeft::default());
        assert_eq!(TimeLeft::from_millis(-5_000.0), TimeLeft::default());
        assert!(TimeLeft::from_millis(-1.0).is_over());
    }

    #[test]
    fn is_over_only_at_zero() {
        assert!(TimeLeft::default().is_over());
        assert!(!TimeLeft::from_millis(1_000.0).is_over());
    }
}
