use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::config::PointerConfig;
use super::interpreter::PointerInterpreter;
use super::interpreter::PointerSource;
use super::pick::PointerTap;
use crate::navigation::Navigation;

pub fn read_mouse(
    buttons: Res<ButtonInput<MouseButton>>,
    window: Single<&Window, With<PrimaryWindow>>,
    config: Res<PointerConfig>,
    mut interpreter: ResMut<PointerInterpreter>,
    mut navigation: ResMut<Navigation>,
    mut taps: MessageWriter<PointerTap>,
) {
    let source = PointerSource::Mouse;
    let cursor = window.cursor_position();

    if buttons.just_pressed(MouseButton::Left)
        && let Some(position) = cursor
    {
        interpreter.pointer_down(navigation.mode(), source, position);
    }

    if buttons.pressed(MouseButton::Left)
        && let Some(position) = cursor
    {
        interpreter.pointer_move(&mut navigation, &config, source, position);
    }

    // a release outside the window ends the gesture where the cursor was last seen
    if buttons.just_released(MouseButton::Left)
        && let Some(position) = cursor.or_else(|| interpreter.gesture_position(source))
        && let Some(position) = interpreter.pointer_up(&mut navigation, &config, source, position)
    {
        taps.write(PointerTap { position });
    }
}

pub fn read_touches(
    touches: Res<Touches>,
    config: Res<PointerConfig>,
    mut interpreter: ResMut<PointerInterpreter>,
    mut navigation: ResMut<Navigation>,
    mut taps: MessageWriter<PointerTap>,
) {
    for touch in touches.iter_just_pressed() {
        interpreter.pointer_down(
            navigation.mode(),
            PointerSource::Touch(touch.id()),
            touch.position(),
        );
    }

    for touch in touches.iter() {
        interpreter.pointer_move(
            &mut navigation,
            &config,
            PointerSource::Touch(touch.id()),
            touch.position(),
        );
    }

    for touch in touches.iter_just_released() {
        if let Some(position) = interpreter.pointer_up(
            &mut navigation,
            &config,
            PointerSource::Touch(touch.id()),
            touch.position(),
        ) {
            taps.write(PointerTap { position });
        }
    }

    for touch in touches.iter_just_canceled() {
        interpreter.pointer_cancel(&mut navigation, PointerSource::Touch(touch.id()));
    }
}

/// Keeps the moon look-around angles tied to the moon they were dragged around
pub fn track_selected_moon(
    navigation: Res<Navigation>,
    mut interpreter: ResMut<PointerInterpreter>,
) {
    interpreter.observe_selected_moon(navigation.selected_moon_index());
}
