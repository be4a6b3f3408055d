use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub attempts: usize,
    pub average_ms: u32,
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    if props.attempts == 0 {
        return html! {};
    }
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:180px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Average"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ format!("{}ms", props.average_ms) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Attempts"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ props.attempts }</span>
            </div>
        </div>
    }
}
