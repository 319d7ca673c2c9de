use super::controller::InteractionController;
use super::messages::{InteractionMessage, InteractionOutcome};
use crate::domains::ui::gesture::InteractiveTarget;
use crate::infra::frame::FrameScheduler;
use crate::infra::viewport::ScrollViewport;

pub fn update<T, V, S>(
    controller: &mut InteractionController,
    message: InteractionMessage<T>,
    viewport: &mut V,
    scheduler: &mut S,
) -> InteractionOutcome
where
    T: InteractiveTarget,
    V: ScrollViewport + ?Sized,
    S: FrameScheduler + ?Sized,
{
    match message {
        InteractionMessage::PointerDown { sample, target } => {
            controller.pointer_down(sample, &target, scheduler)
        }
        InteractionMessage::PointerMove(sample) => {
            controller.pointer_move(sample, viewport, scheduler)
        }
        InteractionMessage::PointerUp(sample) => {
            controller.pointer_up(sample, scheduler)
        }
        InteractionMessage::PointerCancel(now) => {
            controller.pointer_cancel(now, scheduler)
        }
        InteractionMessage::NativeScroll => {
            controller.native_scroll(&*viewport, scheduler)
        }
        InteractionMessage::Frame(handle, now) => {
            controller.frame(handle, now, viewport, scheduler)
        }
    }
}
