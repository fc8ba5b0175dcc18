use egui::{Context, PointerButton, Pos2, Rect};

/// Where an input event happened.
#[derive(Debug, Clone, Copy)]
pub struct InputLocation {
    /// The position in screen coordinates.
    pub position: Pos2,
    /// Whether this position is within the canvas bounds.
    pub is_in_canvas: bool,
}

/// The pointer events the drawing actions are wired to.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Mouse button was pressed.
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released.
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed).
    PointerMove {
        location: InputLocation,
        /// Buttons that are currently held down.
        held_buttons: Vec<PointerButton>,
    },
    /// Mouse left the window. Ends any stroke in progress, since the
    /// release may happen where we cannot see it.
    PointerLeave,
}

/// Converts raw egui input into the domain events above.
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect: Rect::NOTHING,
        }
    }

    /// Update the canvas rectangle (the canvas moves when panels resize).
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process raw egui input and generate our InputEvents.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            if let Some(pos) = input.pointer.hover_pos() {
                if Some(pos) != self.last_pointer_pos {
                    let mut held_buttons = Vec::new();
                    for button in [
                        PointerButton::Primary,
                        PointerButton::Secondary,
                        PointerButton::Middle,
                    ] {
                        if input.pointer.button_down(button) {
                            held_buttons.push(button);
                        }
                    }
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos),
                        held_buttons,
                    });
                }
                self.last_pointer_pos = Some(pos);
            } else if self.last_pointer_pos.is_some() {
                events.push(InputEvent::PointerLeave);
                self.last_pointer_pos = None;
            }

            for button in [
                PointerButton::Primary,
                PointerButton::Secondary,
                PointerButton::Middle,
            ] {
                if input.pointer.button_pressed(button) {
                    if let Some(pos) = input.pointer.hover_pos() {
                        events.push(InputEvent::PointerDown {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                }
                if input.pointer.button_released(button) {
                    if let Some(pos) = input.pointer.hover_pos() {
                        events.push(InputEvent::PointerUp {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                }
            }
        });

        events
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
