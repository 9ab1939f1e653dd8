use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::ScrollDragOptions;
use crate::dom::ScrollDrag;
use crate::model::Item;

#[derive(Properties, PartialEq, Clone)]
pub struct ItemStripProps {
    pub items: Vec<Item>,
    pub options: ScrollDragOptions,
}

/// Horizontally scrolling row of items with drag-to-scroll.
#[function_component(ItemStrip)]
pub fn item_strip(props: &ItemStripProps) -> Html {
    let strip_ref = use_node_ref();
    let drag = use_mut_ref(|| None::<ScrollDrag>);

    // Re-attach when the wiring changes (clamp, debug); the scale factor is
    // applied to the live controller by the effect below
    {
        let strip_ref = strip_ref.clone();
        let drag = drag.clone();
        let scale_factor = props.options.scale_factor;
        let wiring = ScrollDragOptions {
            scale_factor: 0.0,
            ..props.options.clone()
        };
        use_effect_with(wiring, move |wiring| {
            let options = ScrollDragOptions {
                scale_factor,
                ..wiring.clone()
            };
            *drag.borrow_mut() = ScrollDrag::try_attach(strip_ref.cast::<HtmlElement>(), options);
            move || {
                drag.borrow_mut().take();
            }
        });
    }
    use_effect_with(props.options.scale_factor, move |scale_factor| {
        if let Some(active) = drag.borrow().as_ref() {
            active.set_scale_factor(*scale_factor);
        }
    });

    // mirrored into data-drag so initScrollDrag on this node picks up the same options
    let config = serde_json::to_string(&props.options).unwrap_or_default();
    html! {
        <div
            ref={strip_ref}
            class="items"
            data-drag={config}
            style="display:flex; gap:12px; overflow-x:auto; padding:12px; border:1px solid #30363d; border-radius:8px; background:#161b22; user-select:none;"
        >
            { for props.items.iter().map(|item| html! {
                <div
                    key={item.id}
                    class="item"
                    style={format!("flex:0 0 160px; height:120px; border-radius:6px; display:flex; align-items:center; justify-content:center; background:hsl({}, 45%, 35%);", item.hue)}
                >
                    { item.label.clone() }
                </div>
            }) }
        </div>
    }
}
