use yew::prelude::*;

pub const SCALE_CHOICES: [f64; 3] = [1.0, 2.0, 3.0];

#[derive(Properties, PartialEq, Clone)]
pub struct ScalePickerProps {
    pub scale_factor: f64,
    pub clamp: bool,
    pub debug: bool,
    pub on_scale: Callback<f64>,
    pub on_toggle_clamp: Callback<()>,
    pub on_toggle_debug: Callback<()>,
}

#[function_component(ScalePicker)]
pub fn scale_picker(props: &ScalePickerProps) -> Html {
    let clamp_cb = {
        let cb = props.on_toggle_clamp.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let debug_cb = {
        let cb = props.on_toggle_debug.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; gap:8px; align-items:center; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px;">
        <span>{"Scroll speed"}</span>
        { for SCALE_CHOICES.iter().map(|&k| {
            let cb = props.on_scale.clone();
            let selected = props.scale_factor == k;
            html! {
                <button
                    onclick={Callback::from(move |_| cb.emit(k))}
                    style={if selected { "border:1px solid #58a6ff;" } else { "" }}
                >
                    { format!("{k}x") }
                </button>
            }
        }) }
        <span style="width:8px;"></span>
        <label style="display:flex; align-items:center; gap:6px; cursor:pointer;">
            <input type="checkbox" checked={props.clamp} onclick={clamp_cb} />
            <span>{"Clamp to edges"}</span>
        </label>
        <label style="display:flex; align-items:center; gap:6px; cursor:pointer;">
            <input type="checkbox" checked={props.debug} onclick={debug_cb} />
            <span>{"Log gestures"}</span>
        </label>
    </div>}
}
