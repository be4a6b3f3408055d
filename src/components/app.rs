use super::{game_view::GameView, stats_panel::StatsPanel};
use crate::clock::GameClock;
use crate::model::{GameAction, GameState, Phase};
use crate::util::{clog, random_delay_ms, random_direction};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(GameState::new);
    let play_again_ref = use_node_ref();

    // Window keydown listener for the lifetime of the component. Every key
    // goes to the reducer; it decides whether the press means anything.
    {
        let game = game.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let keydown_cb = {
                let game = game.clone();
                Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                    game.dispatch(GameAction::KeyPress {
                        key: e.key(),
                        now_ms: js_sys::Date::now(),
                    });
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                .unwrap();
            let window_clone = window.clone();
            move || {
                let _ = window_clone.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = &keydown_cb;
            }
        });
    }

    // Arm the trial clock on entry to Ready; the destructor cancels it when
    // the phase changes or the component unmounts, so a stale fire can never
    // reach the reducer.
    {
        let game = game.clone();
        use_effect_with(game.phase, move |phase| {
            let clock = if *phase == Phase::Ready {
                let game = game.clone();
                GameClock::schedule(random_delay_ms(), move || {
                    game.dispatch(GameAction::TrialBegin {
                        direction: random_direction(),
                        now_ms: js_sys::Date::now(),
                    });
                })
            } else {
                None
            };
            move || {
                if let Some(clock) = clock {
                    clock.cancel();
                }
            }
        });
    }

    // Move focus to "Play Again" when a round ends.
    {
        let play_again_ref = play_again_ref.clone();
        use_effect_with(game.phase, move |phase| {
            if *phase == Phase::Finished {
                if let Some(btn) = play_again_ref.cast::<web_sys::HtmlElement>() {
                    let _ = btn.focus();
                }
            }
            || ()
        });
    }

    // Log phase transitions
    {
        use_effect_with(game.phase, move |phase| {
            clog(&format!("phase: {:?}", phase));
            || ()
        });
    }

    let on_start = {
        let game = game.clone();
        Callback::from(move |()| game.dispatch(GameAction::Start))
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh; display:flex; align-items:center; justify-content:center; background:#0e1116; color:#e6edf3; font-family:system-ui, sans-serif;">
            <StatsPanel attempts={game.attempts()} average_ms={game.average_ms()} />
            <GameView
                phase={game.phase}
                direction={game.trial.map(|t| t.direction)}
                reaction_time_ms={game.reaction_time_ms}
                error={game.error}
                on_start={on_start}
                play_again_ref={play_again_ref}
            />
        </div>
    }
}
