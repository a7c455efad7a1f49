use iced::keyboard::{self, Key};
use iced::widget::{button, column, container, image, row, slider, text, text_editor, Column};
use iced::{Alignment, Element, Font, Length, Subscription, Task, Theme};

use sheet_editor::dialogs;
use sheet_editor::state::document::{buffer_text, ExportFormat};
use sheet_editor::state::session::EditorSession;
use sheet_editor::state::zoom::{ZoomSettings, SLIDER_RANGE};

/// Initial window size
const WINDOW_SIZE: (f32, f32) = (800.0, 600.0);

/// Width of the portrait preview next to the text buffer
const PREVIEW_WIDTH: f32 = 180.0;

/// Main application state
struct SheetEditor {
    /// Which image is open and where it stands relative to disk
    session: EditorSession,
    /// The editable JSON text
    content: text_editor::Content,
    /// Font zoom for the buffer
    zoom: ZoomSettings,
    /// Portrait of the open sheet
    preview: Option<image::Handle>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// File > Open (also sent once at startup)
    Open,
    /// File > Save
    Save,
    /// File > Export as ...
    Export(ExportFormat),
    /// File > Quit
    Quit,
    /// Typing, selection, scrolling in the buffer
    Edit(text_editor::Action),
    ZoomIn,
    ZoomOut,
    ZoomReset,
    /// Font-size slider moved
    FontSizeChanged(u16),
}

impl SheetEditor {
    /// Create a new instance of the application and prompt for a PNG straight away
    fn new() -> (Self, Task<Message>) {
        let editor = SheetEditor {
            session: EditorSession::new(),
            content: text_editor::Content::new(),
            zoom: ZoomSettings::new(),
            preview: None,
            status: "Open a PNG to edit its character sheet.".to_string(),
        };

        (editor, Task::done(Message::Open))
    }

    fn title(&self) -> String {
        match self.session.source().and_then(|path| path.file_name()) {
            Some(name) => format!("Character Sheet Editor - {}", name.to_string_lossy()),
            None => "Character Sheet Editor".to_string(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Open => self.open(),
            Message::Save => self.save(),
            Message::Export(format) => self.export(format),
            Message::Quit => return iced::exit(),
            Message::Edit(action) => {
                let is_edit = action.is_edit();
                self.content.perform(action);
                if is_edit {
                    self.session.mark_edited();
                    self.refresh_status();
                }
            }
            Message::ZoomIn => self.zoom.zoom_in(),
            Message::ZoomOut => self.zoom.zoom_out(),
            Message::ZoomReset => self.zoom.reset(),
            Message::FontSizeChanged(size) => self.zoom.set_font_size(size),
        }

        Task::none()
    }

    fn open(&mut self) {
        let Some(path) = dialogs::pick_png() else {
            return;
        };

        match self.session.open(&path) {
            Ok(buffer) => {
                self.content = text_editor::Content::with_text(&buffer);
                self.preview = Some(image::Handle::from_path(&path));
                self.status = format!("Loaded {}", path.display());
            }
            Err(e) => {
                tracing::warn!("❌ Could not open {}: {}", path.display(), e);
                dialogs::show_error("Error", &e.to_string());
            }
        }
    }

    fn save(&mut self) {
        let document = match self.session.prepare_save(&self.buffer()) {
            Ok(document) => document,
            Err(e) => {
                dialogs::show_error("Error", &e.to_string());
                return;
            }
        };

        let suggested = self.suggested_name();
        let Some(output) = dialogs::save_png(suggested.as_deref()) else {
            return;
        };

        match self.session.save(&document, &output) {
            Ok(()) => {
                self.refresh_status();
                dialogs::show_info(
                    "Success",
                    &format!("Modified image saved as {}", output.display()),
                );
            }
            Err(e) => {
                tracing::warn!("❌ Save failed: {}", e);
                dialogs::show_error("Error", &e.to_string());
            }
        }
    }

    fn export(&mut self, format: ExportFormat) {
        let Some(path) = dialogs::save_export(format) else {
            return;
        };

        match self.session.export(&self.buffer(), &path, format) {
            Ok(_) => {
                self.refresh_status();
                dialogs::show_info("Success", &format!("Data exported as {}.", format));
            }
            Err(e) => dialogs::show_error("Error", &e.to_string()),
        }
    }

    /// The buffer exactly as shown (`Content::text` would append a newline)
    fn buffer(&self) -> String {
        buffer_text(self.content.lines())
    }

    /// File name of the open image, offered as the default save target
    fn suggested_name(&self) -> Option<String> {
        self.session
            .source()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
    }

    fn refresh_status(&mut self) {
        if let Some(doc) = self.session.document() {
            self.status = doc.status.describe();
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let loaded = self.session.is_loaded();

        let mut file_bar = row![
            button("Open").on_press(Message::Open),
            button("Save").on_press_maybe(loaded.then_some(Message::Save)),
        ]
        .spacing(10);
        for format in ExportFormat::ALL {
            file_bar = file_bar.push(
                button(text(format!("Export as {}", format.label())))
                    .on_press(Message::Export(format)),
            );
        }
        file_bar = file_bar.push(button("Quit").on_press(Message::Quit));

        let editor = text_editor(&self.content)
            .on_action(Message::Edit)
            .font(Font::MONOSPACE)
            .size(f32::from(self.zoom.font_size()))
            .height(Length::Fill);

        let body: Element<Message> = match &self.preview {
            Some(handle) => row![
                image(handle.clone()).width(Length::Fixed(PREVIEW_WIDTH)),
                editor,
            ]
            .spacing(10)
            .into(),
            None => editor.into(),
        };

        let zoom_bar = row![
            button("Zoom In (Ctrl +)").on_press(Message::ZoomIn),
            button("Zoom Out (Ctrl -)").on_press(Message::ZoomOut),
            slider(
                SLIDER_RANGE,
                self.zoom.slider_value(),
                Message::FontSizeChanged
            )
            .width(Length::Fixed(200.0)),
            text(format!("{} pt", self.zoom.font_size())).size(14),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let content: Column<Message> = column![
            file_bar,
            text("Edit Character Sheet").size(20),
            body,
            zoom_bar,
            text(&self.status).size(14),
        ]
        .spacing(10)
        .padding(20);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Keyboard shortcuts
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| {
            if !modifiers.command() {
                return None;
            }
            match key.as_ref() {
                Key::Character("+") | Key::Character("=") => Some(Message::ZoomIn),
                Key::Character("-") => Some(Message::ZoomOut),
                Key::Character("0") => Some(Message::ZoomReset),
                Key::Character("o") => Some(Message::Open),
                Key::Character("s") => Some(Message::Save),
                _ => None,
            }
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    sheet_editor::logging::init();
    tracing::info!("🎨 Character Sheet Editor starting");

    iced::application(SheetEditor::title, SheetEditor::update, SheetEditor::view)
        .subscription(SheetEditor::subscription)
        .theme(SheetEditor::theme)
        .window_size(WINDOW_SIZE)
        .centered()
        .run_with(SheetEditor::new)
}

