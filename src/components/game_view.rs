use crate::model::{Direction, Phase};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub phase: Phase,
    /// The revealed direction; `Some` only while a round is live.
    pub direction: Option<Direction>,
    pub reaction_time_ms: u32,
    pub error: bool,
    pub on_start: Callback<()>,
    /// Attached to the "Play Again" button so the parent can focus it.
    pub play_again_ref: NodeRef,
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let start_btn = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let btn_style = "padding:10px 24px; font-size:16px; border-radius:8px; border:1px solid #30363d; background:#21262d; color:#e6edf3; cursor:pointer;";

    match props.phase {
        Phase::Waiting => html! {
            <div style="text-align:center; max-width:520px;">
                <h1 style="margin:0 0 12px 0; color:#58a6ff;">{"Reaction Speed Test"}</h1>
                <p style="margin:0 0 20px 0; opacity:0.85;">{"Press the correct arrow key when you see the direction"}</p>
                <button onclick={start_btn} style={btn_style}>{"Start Game"}</button>
            </div>
        },
        Phase::Ready => html! {
            <div style="text-align:center;">
                <h2>{"Get Ready..."}</h2>
            </div>
        },
        Phase::Playing => {
            let label = props.direction.map(|d| d.label()).unwrap_or("");
            html! {
                <div style="text-align:center;">
                    <h1 style="font-size:64px; margin:0; color:#3fb950;">{ format!("{}!", label) }</h1>
                </div>
            }
        }
        Phase::Finished => html! {
            <div style="text-align:center;">
                {
                    if props.error {
                        html! { <h2 style="color:#f85149;">{"Wrong key! Try again."}</h2> }
                    } else {
                        html! { <h2>{ format!("Your reaction time: {}ms", props.reaction_time_ms) }</h2> }
                    }
                }
                <button ref={props.play_again_ref.clone()} onclick={start_btn} style={btn_style}>{"Play Again"}</button>
            </div>
        },
    }
}
