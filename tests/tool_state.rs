use std::cell::RefCell;
use std::rc::Rc;

use eframe_doodle::{
    Colour, ListenerError, MenuSelection, NamedColour, Thickness, ToolError, ToolListener,
    ToolMenu, ToolState,
};

/// Records every notification it receives
#[derive(Clone, Default)]
struct Recorder {
    seen: Rc<RefCell<Vec<(Colour, u32)>>>,
}

impl ToolListener for Recorder {
    fn update(&mut self, colour: Colour, thickness: Thickness) -> Result<(), ListenerError> {
        self.seen.borrow_mut().push((colour, thickness.get()));
        Ok(())
    }
}

#[test]
fn test_notifications_follow_changes_in_order() {
    let mut tools = ToolState::default();
    let first = Recorder::default();
    let second = Recorder::default();
    tools.add_listener(Box::new(first.clone()));
    tools.add_listener(Box::new(second.clone()));

    tools.set_thickness(5).unwrap();
    tools.set_colour_by_name("Red").unwrap();

    let expected = vec![
        (Colour::Named(NamedColour::White), 5),
        (Colour::Named(NamedColour::Red), 5),
    ];
    assert_eq!(*first.seen.borrow(), expected);
    assert_eq!(*second.seen.borrow(), expected);
}

#[test]
fn test_listeners_are_called_in_registration_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut tools = ToolState::default();
    for index in 0..3 {
        let order = order.clone();
        tools.add_listener(Box::new(
            move |_: Colour, _: Thickness| -> Result<(), ListenerError> {
                order.borrow_mut().push(index);
                Ok(())
            },
        ));
    }

    tools.notify();
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

#[test]
fn test_out_of_range_thickness_is_rejected_silently() {
    let mut tools = ToolState::default();
    let recorder = Recorder::default();
    tools.add_listener(Box::new(recorder.clone()));

    assert_eq!(tools.set_thickness(17), Err(ToolError::ThicknessOutOfRange(17)));
    assert_eq!(tools.set_thickness(0), Err(ToolError::ThicknessOutOfRange(0)));
    assert_eq!(tools.thickness().get(), 1);
    assert!(recorder.seen.borrow().is_empty());
}

#[test]
fn test_unknown_colour_is_rejected_silently() {
    let mut tools = ToolState::default();
    let recorder = Recorder::default();
    tools.add_listener(Box::new(recorder.clone()));

    assert_eq!(
        tools.set_colour_by_name("Chartreuse"),
        Err(ToolError::UnknownColour("Chartreuse".to_owned()))
    );
    assert_eq!(tools.colour(), Colour::Named(NamedColour::White));
    assert!(recorder.seen.borrow().is_empty());
}

#[test]
fn test_menu_selection_notifies_once() {
    let mut tools = ToolState::default();
    let recorder = Recorder::default();
    tools.add_listener(Box::new(recorder.clone()));

    MenuSelection::from_id(113).unwrap().apply(&mut tools);
    assert_eq!(*recorder.seen.borrow(), vec![(Colour::Named(NamedColour::Navy), 1)]);

    let checked: Vec<String> = ToolMenu::colour_entries(&tools)
        .into_iter()
        .filter(|entry| entry.checked)
        .map(|entry| entry.label)
        .collect();
    assert_eq!(checked, vec!["NAVY".to_owned()]);
}
