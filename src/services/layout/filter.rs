use crate::models::event::Event;
use crate::models::view::ViewState;

/// Select the events visible under the given view state.
///
/// An event passes when its day falls inside the window and its resource is
/// selected; an empty selection shows every resource. Surviving events keep
/// their input order.
pub fn filter_events<'a>(events: &'a [Event], view: &ViewState) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| view.window.contains(event.day) && view.shows_resource(&event.resource_id))
        .collect()
}
