use fltk::{
    dialog,
    enums::Font,
    group::Flex,
    menu::{Choice, MenuBar},
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::controllers::editor::EditorController;
use super::controllers::view_sync::{ViewSync, displayable};
use super::domain::{AppSettings, DocumentEvent, FontFamily};
use super::services::text_ops::window_title;
use crate::ui::main_window::{FONT_ROW_HEIGHT, MainWidgets, family_index, size_index};

/// FLTK font used to render a family. Families the toolkit has no face for
/// fall back to its default sans-serif.
pub fn fltk_font(family: FontFamily) -> Font {
    match family {
        FontFamily::System => Font::Helvetica,
        FontFamily::Courier => Font::Courier,
        FontFamily::Helvetica => Font::Helvetica,
        FontFamily::TimesNewRoman => Font::Times,
    }
}

pub struct AppState {
    pub controller: EditorController,
    pub settings: AppSettings,
    pub window: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub font_row: Flex,
    pub family_choice: Choice,
    pub size_choice: Choice,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub font_picker_visible: bool,
    view_sync: ViewSync,
}

impl AppState {
    pub fn new(widgets: MainWidgets, controller: EditorController, settings: AppSettings) -> Self {
        Self {
            controller,
            settings,
            window: widgets.wind,
            flex: widgets.flex,
            menu: widgets.menu,
            font_row: widgets.font_row,
            family_choice: widgets.family_choice,
            size_choice: widgets.size_choice,
            editor: widgets.text_editor,
            buffer: widgets.buffer,
            font_picker_visible: false,
            view_sync: ViewSync::new(),
        }
    }

    /// Update the window title based on the document
    pub fn update_window_title(&mut self) {
        let doc = self.controller.document();
        self.window
            .set_label(&window_title(&doc.display_name(), doc.is_dirty()));
    }

    /// Re-render whatever the document reports as changed.
    pub fn on_document_changed(&mut self, event: DocumentEvent) {
        match event {
            DocumentEvent::TextLoaded => {
                let text = self.controller.document().text().to_string();
                let shown = displayable(&text);
                self.buffer.set_text(shown);
                self.view_sync.rendered(self.buffer.text());
                if shown.len() < text.len() {
                    tracing::warn!(
                        "Document contains NUL characters; view shows {} of {} bytes",
                        shown.len(),
                        text.len()
                    );
                    dialog::alert_default(
                        "This file contains NUL characters. Only the text before the first one is shown; \
                         saving without editing keeps the whole file.",
                    );
                }
                self.editor.set_insert_position(0);
                self.editor.scroll(0, 0);
                self.update_window_title();
            }
            DocumentEvent::TextEdited | DocumentEvent::Saved | DocumentEvent::SourceChanged => {
                self.update_window_title();
            }
            DocumentEvent::FontChanged => self.apply_font(),
        }
    }

    /// The user typed into the editor: the buffer becomes the document text.
    /// Notifications caused by rendering the document are ignored.
    pub fn buffer_modified(&mut self) {
        if let Some(text) = self.view_sync.user_edit(self.buffer.text()) {
            self.controller.edit(text);
        }
    }

    // --- File ---

    pub fn file_open(&mut self) {
        if let Err(e) = self.controller.open() {
            dialog::alert_default(&e.to_string());
        }
    }

    pub fn file_save(&mut self) {
        if let Err(e) = self.controller.save() {
            dialog::alert_default(&e.to_string());
        }
    }

    pub fn file_save_as(&mut self) {
        if let Err(e) = self.controller.save_as() {
            dialog::alert_default(&e.to_string());
        }
    }

    /// Handle quit request. Returns `true` if the app should exit.
    pub fn file_quit(&mut self) -> bool {
        let should_quit = if self.controller.document().is_dirty() {
            let choice = dialog::choice2_default(
                "You have unsaved changes.",
                "Save",
                "Quit Without Saving",
                "Cancel",
            );

            match choice {
                Some(0) => {
                    self.file_save();
                    !self.controller.document().is_dirty()
                }
                Some(1) => true,
                _ => false,
            }
        } else {
            true
        };

        if should_quit {
            self.settings.last_open_directory = self.controller.last_dir().map(|p| p.to_path_buf());
            self.persist_settings();
        }

        should_quit
    }

    // --- Format ---

    pub fn toggle_font_picker(&mut self) {
        self.font_picker_visible = !self.font_picker_visible;
        if self.font_picker_visible {
            self.font_row.show();
            self.flex.fixed(&self.font_row, FONT_ROW_HEIGHT);
        } else {
            self.font_row.hide();
            self.flex.fixed(&self.font_row, 0);
        }
        self.flex.layout();
        self.update_menu_checkbox("View/Show Font Picker", self.font_picker_visible);
        self.window.redraw();
    }

    pub fn set_font(&mut self, family: FontFamily) {
        match self.controller.set_font_family(family) {
            Ok(()) => {
                self.settings.font = family;
                self.persist_settings();
            }
            Err(e) => dialog::alert_default(&e.to_string()),
        }
    }

    pub fn set_font_size(&mut self, size: u32) {
        match self.controller.set_font_size(size) {
            Ok(()) => {
                self.settings.font_size = size;
                self.persist_settings();
            }
            Err(e) => dialog::alert_default(&e.to_string()),
        }
    }

    /// Push the document's display font to the editor and the picker.
    pub fn apply_font(&mut self) {
        let font = self.controller.document().display_font();
        self.editor.set_text_font(fltk_font(font.family()));
        self.editor.set_text_size(font.size() as i32);
        self.family_choice.set_value(family_index(font.family()));
        self.size_choice.set_value(size_index(font.size()));
        self.editor.redraw();
    }

    fn persist_settings(&self) {
        if let Err(e) = self.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }

    fn update_menu_checkbox(&self, path: &str, checked: bool) {
        let idx = self.menu.find_index(path);
        if idx >= 0 {
            if let Some(mut item) = self.menu.at(idx) {
                if checked {
                    item.set();
                } else {
                    item.clear();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_has_a_face() {
        assert_eq!(fltk_font(FontFamily::Courier), Font::Courier);
        assert_eq!(fltk_font(FontFamily::TimesNewRoman), Font::Times);
        assert_eq!(fltk_font(FontFamily::System), fltk_font(FontFamily::Helvetica));
    }
}
