use fltk::{app, enums::Event, prelude::*};
use tracing_subscriber::EnvFilter;

use power_word::app::domain::{AppSettings, Document, DocumentEvent, Message};
use power_word::app::state::AppState;
use power_word::app::EditorController;
use power_word::ui::file_dialogs::NativeFilePicker;
use power_word::ui::main_window::build_main_window;
use power_word::ui::menu::build_menu;

fn main() {
    // Set RUST_LOG=debug to see debug messages
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let font = settings.display_font();

    let mut widgets = build_main_window(&sender, font);
    build_menu(&mut widgets.menu, &sender);

    widgets.wind.set_callback({
        let s = sender;
        move |_| {
            // Escape also triggers the window callback; only react to a real close
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    let mut document = Document::new(font);
    document.subscribe(Box::new(move |event: &DocumentEvent| {
        sender.send(Message::DocumentChanged(*event));
    }));

    let controller = EditorController::new(
        document,
        Box::new(NativeFilePicker),
        settings.decode_policy,
        settings.last_open_directory.clone(),
    );

    let mut state = AppState::new(widgets, controller, settings);
    state.apply_font();
    state.update_window_title();
    state.window.end();
    state.window.show();

    tracing::info!("PowerWord started");

    while app.wait() {
        while let Some(msg) = receiver.recv() {
            match msg {
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FileQuit | Message::WindowClose => {
                    if state.file_quit() {
                        app.quit();
                    }
                }
                Message::BufferModified => state.buffer_modified(),
                Message::ToggleFontPicker => state.toggle_font_picker(),
                Message::SetFont(family) => state.set_font(family),
                Message::SetFontSize(size) => state.set_font_size(size),
                Message::DocumentChanged(event) => state.on_document_changed(event),
            }
        }
    }
}
