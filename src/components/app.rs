use super::{drag_board::DragBoard, item_strip::ItemStrip, scale_picker::ScalePicker};
use crate::config::{FreeDragOptions, ScrollDragOptions};
use crate::model::sample_items;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let strip_items = use_memo((), |_| sample_items(24));
    let board_items = use_memo((), |_| sample_items(6));
    let scroll_options = use_state(ScrollDragOptions::default);
    let board_options = use_state(FreeDragOptions::default);

    let on_scale = {
        let scroll_options = scroll_options.clone();
        Callback::from(move |k: f64| {
            let mut opts = (*scroll_options).clone();
            opts.scale_factor = k;
            scroll_options.set(opts);
        })
    };
    let on_toggle_clamp = {
        let scroll_options = scroll_options.clone();
        Callback::from(move |_: ()| {
            let mut opts = (*scroll_options).clone();
            opts.clamp_to_extent = !opts.clamp_to_extent;
            scroll_options.set(opts);
        })
    };
    let on_toggle_debug = {
        let scroll_options = scroll_options.clone();
        let board_options = board_options.clone();
        Callback::from(move |_: ()| {
            let mut s = (*scroll_options).clone();
            let mut b = (*board_options).clone();
            s.debug = !s.debug;
            b.debug = s.debug;
            scroll_options.set(s);
            board_options.set(b);
        })
    };

    html! {
        <div id="root" style="display:flex; flex-direction:column; gap:16px; padding:16px; color:#c9d1d9; background:#0d1117; min-height:100vh; font-family:sans-serif;">
            <h2 style="margin:0;">{"Items"}</h2>
            <ScalePicker
                scale_factor={scroll_options.scale_factor}
                clamp={scroll_options.clamp_to_extent}
                debug={scroll_options.debug}
                on_scale={on_scale}
                on_toggle_clamp={on_toggle_clamp}
                on_toggle_debug={on_toggle_debug}
            />
            <ItemStrip items={(*strip_items).clone()} options={(*scroll_options).clone()} />
            <h2 style="margin:0;">{"Board"}</h2>
            <DragBoard items={(*board_items).clone()} options={(*board_options).clone()} />
        </div>
    }
}
