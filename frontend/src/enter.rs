//! Drives `motion` enter tweens into opacity and transform styles on
//! mount. One frame task per animated element; the task ends as soon as
//! the tween settles and is dropped with the element.

use std::time::Duration;

use motion::{EnterTween, VisualState};
use zoon::*;

/// Frame step for the tween driver.
const FRAME_MS: u32 = 16;

/// Wraps `content` in a block that fills its slot and plays `tween` once.
///
/// A tween that is already settled spawns no task and renders the resting
/// styles immediately, so the non-animated page is this same wrapper with
/// `EnterTween::settled()`.
pub fn animated_block<T: Element>(tween: EnterTween, content: T) -> impl Element + use<T> {
    let (state, driver) = drive(tween);
    El::new()
        .s(Width::fill())
        .update_raw_el(move |raw_el| {
            raw_el
                .style_signal("opacity", state.signal().map(opacity_value))
                .style_signal("transform", state.signal().map(transform_value))
        })
        .child(content)
        .after_remove(move |_| drop(driver))
}

/// Like `animated_block`, but sized by its content. Used for entries laid
/// out in a row, where a filling wrapper would break the layout.
pub fn animated_item<T: Element>(tween: EnterTween, content: T) -> impl Element + use<T> {
    let (state, driver) = drive(tween);
    El::new()
        .update_raw_el(move |raw_el| {
            raw_el
                .style_signal("opacity", state.signal().map(opacity_value))
                .style_signal("transform", state.signal().map(transform_value))
        })
        .child(content)
        .after_remove(move |_| drop(driver))
}

/// Samples the tween into a mutable visual state on a frame timer. Already
/// settled tweens get no task at all.
fn drive(tween: EnterTween) -> (Mutable<VisualState>, Option<TaskHandle>) {
    let state = Mutable::new(tween.sample(Duration::ZERO));

    if tween.is_settled_at(Duration::ZERO) {
        return (state, None);
    }

    let driver = Task::start_droppable({
        let state = state.clone();
        async move {
            let mut elapsed = Duration::ZERO;
            loop {
                Timer::sleep(FRAME_MS).await;
                elapsed += Duration::from_millis(FRAME_MS.into());
                state.set_neq(tween.sample(elapsed));
                if tween.is_settled_at(elapsed) {
                    break;
                }
            }
        }
    });
    (state, Some(driver))
}

fn opacity_value(visual: VisualState) -> String {
    visual.opacity.to_string()
}

fn transform_value(visual: VisualState) -> String {
    format!("translate({}px, {}px)", visual.x, visual.y)
}
