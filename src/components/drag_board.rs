use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::FreeDragOptions;
use crate::dom::FreeDrag;
use crate::model::{Item, Size, grid_slot};

const CELL: Size = Size {
    width: 140.0,
    height: 90.0,
};

#[derive(Properties, PartialEq, Clone)]
pub struct DragBoardProps {
    pub items: Vec<Item>,
    pub options: FreeDragOptions,
    #[prop_or(4)]
    pub per_row: usize,
}

/// Board whose items can be dropped anywhere inside it.
#[function_component(DragBoard)]
pub fn drag_board(props: &DragBoardProps) -> Html {
    let board_ref = use_node_ref();

    {
        let board_ref = board_ref.clone();
        use_effect_with(props.options.clone(), move |options| {
            let drag = FreeDrag::try_attach(board_ref.cast::<HtmlElement>(), options.clone());
            move || drop(drag)
        });
    }

    let item_class = props.options.item_selector.trim_start_matches('.').to_string();
    let config = serde_json::to_string(&props.options).unwrap_or_default();
    html! {
        <div
            ref={board_ref}
            class="board"
            data-drag={config}
            style="position:relative; height:320px; overflow:hidden; border:1px dashed #30363d; border-radius:8px; background:#0e1116; user-select:none; touch-action:none;"
        >
            { for props.items.iter().enumerate().map(|(i, item)| {
                let at = grid_slot(i, props.per_row, CELL, props.options.inset);
                html! {
                    <div
                        key={item.id}
                        class={item_class.clone()}
                        style={format!("position:absolute; left:{}px; top:{}px; width:120px; height:70px; border-radius:6px; cursor:grab; display:flex; align-items:center; justify-content:center; background:hsl({}, 55%, 40%);", at.x, at.y, item.hue)}
                    >
                        { item.label.clone() }
                    </div>
                }
            }) }
        </div>
    }
}
