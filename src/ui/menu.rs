use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::font::{FONT_SIZES, FontFamily};
use crate::app::domain::messages::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // View
    menu.add("View/Show Font Picker", Shortcut::None, MenuFlag::Toggle, { let s = *s; move |_| s.send(Message::ToggleFontPicker) });

    // Format
    for family in FontFamily::all() {
        let family = *family;
        menu.add(&format!("Format/Font/{}", family.name()), Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFont(family)) });
    }
    for size in FONT_SIZES {
        let size = *size;
        menu.add(&format!("Format/Font Size/{}", size), Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(size)) });
    }
}
