use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use common::{KeyEvent, KeyEventHub};

/// Window-level key event hub. Characters subscribe while they are mounted.
#[derive(Resource, Default, Debug)]
pub struct KeyboardHub(pub KeyEventHub);

pub fn key_event_from(input: &KeyboardInput) -> KeyEvent {
    let code = format!("{:?}", input.key_code);
    match input.state {
        ButtonState::Pressed => KeyEvent::down(code),
        ButtonState::Released => KeyEvent::up(code),
    }
}

pub fn forward_keyboard_input(
    mut keyboard: MessageReader<KeyboardInput>,
    mut hub: ResMut<KeyboardHub>,
) {
    for input in keyboard.read() {
        hub.0.dispatch(&key_event_from(input));
    }
}
