use fltk::{
    app::Sender,
    button::Button,
    enums::Color,
    group::{Flex, FlexType},
    menu::{Choice, MenuBar},
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::font::{DisplayFont, FONT_SIZES, FontFamily};
use crate::app::domain::messages::Message;

pub const TOOLBAR_HEIGHT: i32 = 34;
pub const FONT_ROW_HEIGHT: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub font_row: Flex,
    pub family_choice: Choice,
    pub size_choice: Choice,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
}

pub fn build_main_window(sender: &Sender<Message>, font: DisplayFont) -> MainWidgets {
    let mut wind = Window::new(100, 100, 640, 480, "Untitled - PowerWord");
    wind.set_xclass("PowerWord");

    let mut flex = Flex::new(0, 0, 640, 480, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Toolbar: Open / Save / Font
    let mut toolbar = Flex::default();
    toolbar.set_type(FlexType::Row);
    toolbar.set_margin(4);
    toolbar.set_spacing(6);
    for (label, msg) in [
        ("@fileopen  Open", Message::FileOpen),
        ("@filesave  Save", Message::FileSave),
        ("Font", Message::ToggleFontPicker),
    ] {
        let mut button = Button::default().with_label(label);
        button.set_callback({
            let s = *sender;
            move |_| s.send(msg)
        });
        toolbar.fixed(&button, 90);
    }
    toolbar.end();
    flex.fixed(&toolbar, TOOLBAR_HEIGHT);

    // Font picker row (initially hidden)
    let mut font_row = Flex::default();
    font_row.set_type(FlexType::Row);
    font_row.set_margin(2);
    font_row.set_spacing(6);

    let mut family_choice = Choice::default();
    let names: Vec<&str> = FontFamily::all().iter().map(|f| f.name()).collect();
    family_choice.add_choice(&names.join("|"));
    family_choice.set_value(family_index(font.family()));
    family_choice.set_callback({
        let s = *sender;
        move |c| {
            let picked = usize::try_from(c.value())
                .ok()
                .and_then(|i| FontFamily::all().get(i));
            if let Some(family) = picked {
                s.send(Message::SetFont(*family));
            }
        }
    });
    font_row.fixed(&family_choice, 180);

    let mut size_choice = Choice::default();
    let sizes: Vec<String> = FONT_SIZES.iter().map(|s| s.to_string()).collect();
    size_choice.add_choice(&sizes.join("|"));
    size_choice.set_value(size_index(font.size()));
    size_choice.set_callback({
        let s = *sender;
        move |c| {
            let picked = usize::try_from(c.value())
                .ok()
                .and_then(|i| FONT_SIZES.get(i));
            if let Some(size) = picked {
                s.send(Message::SetFontSize(*size));
            }
        }
    });
    font_row.fixed(&size_choice, 70);

    font_row.end();
    font_row.hide();
    flex.fixed(&font_row, 0);

    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);
    text_editor.set_frame(fltk::enums::FrameType::BorderBox);
    text_editor.set_color(Color::White);

    flex.end();
    wind.resizable(&flex);

    let mut modified = buffer.clone();
    modified.add_modify_callback({
        let s = *sender;
        move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                s.send(Message::BufferModified);
            }
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        font_row,
        family_choice,
        size_choice,
        text_editor,
        buffer,
    }
}

/// Position of `family` in the family choice.
pub fn family_index(family: FontFamily) -> i32 {
    FontFamily::all()
        .iter()
        .position(|f| *f == family)
        .map_or(-1, |i| i as i32)
}

/// Position of `size` in the size choice, or -1 when the size is not listed.
pub fn size_index(size: u32) -> i32 {
    FONT_SIZES
        .iter()
        .position(|s| *s == size)
        .map_or(-1, |i| i as i32)
}
