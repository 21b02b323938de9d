use iced::{
    widget::{
        button, column, container, horizontal_space, image as img, mouse_area, row, scrollable,
        text, text_input,
    },
    Element, Length, Subscription, Task, Theme,
};
use std::path::PathBuf;

mod bookmarks;
mod controller;
mod flipbook;
mod layout;
mod pdf_viewer;
mod renderer;
mod session;

use layout::LayoutConfig;
use renderer::PdfRenderer;
use session::Session;

/// Window height assumed until the first resize event arrives.
const DEFAULT_WINDOW_HEIGHT: f32 = 768.0;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter("pageflip=debug,info")
        .init();

    iced::application("Pageflip", App::update, App::view)
        .subscription(App::subscription)
        .theme(|_| Theme::Dark)
        .run_with(App::new)
}

#[derive(Debug, Clone)]
enum Message {
    OpenFile,
    FileSelected(Option<PathBuf>),
    /// Decode completion for the load generation it belongs to. Applied only
    /// while that generation is still the active one; a later `OpenFile`
    /// abandons any in-flight load.
    Decode(u64, PathBuf),
    NextPage,
    PrevPage,
    /// The flip surface reports the zero-based page it landed on, whether the
    /// flip came from the toolbar or from the user turning a page directly.
    PageFlipped(u16),
    GotoInput(String),
    GotoSubmit,
    GotoBookmark(u16),
    AddBookmark,
    RemoveBookmark(usize),
    ZoomIn,
    ZoomOut,
    WindowResized(f32),
}

struct App {
    renderer: Option<PdfRenderer>,
    session: Option<Session>,
    goto_field: String,
    window_height: f32,
    load_generation: u64,
}

async fn pick_pdf() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .add_filter("PDF documents", &["pdf"])
        .pick_file()
        .await
        .map(|file| file.path().to_path_buf())
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let renderer = match PdfRenderer::new() {
            Ok(renderer) => Some(renderer),
            Err(e) => {
                tracing::error!("{e}");
                None
            }
        };
        (
            Self {
                renderer,
                session: None,
                goto_field: String::new(),
                window_height: DEFAULT_WINDOW_HEIGHT,
                load_generation: 0,
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFile => {
                return Task::perform(pick_pdf(), Message::FileSelected);
            }
            Message::FileSelected(Some(path)) => {
                self.load_generation += 1;
                return Task::done(Message::Decode(self.load_generation, path));
            }
            Message::FileSelected(None) => {}
            Message::Decode(generation, path) => {
                if generation != self.load_generation {
                    tracing::debug!("discarding stale decode of {}", path.display());
                    return Task::none();
                }
                let Some(renderer) = &self.renderer else {
                    tracing::error!("no PDF renderer available");
                    return Task::none();
                };
                match Session::open(renderer, path, self.window_height, LayoutConfig::default()) {
                    Ok(session) => {
                        tracing::info!(
                            "opened {} ({} pages)",
                            session.file_name(),
                            session.controller.total_pages()
                        );
                        self.goto_field.clear();
                        self.session = Some(session);
                    }
                    Err(e) => {
                        tracing::error!("failed to open document: {}", e);
                    }
                }
            }
            Message::NextPage => {
                if let Some(session) = &mut self.session {
                    let index = session.flipbook.flip_next();
                    return Task::done(Message::PageFlipped(index));
                }
            }
            Message::PrevPage => {
                if let Some(session) = &mut self.session {
                    let index = session.flipbook.flip_prev();
                    return Task::done(Message::PageFlipped(index));
                }
            }
            Message::PageFlipped(index) => {
                if let Some(session) = &mut self.session {
                    session.controller.reconcile(index);
                }
            }
            Message::GotoInput(value) => {
                self.goto_field = value;
            }
            Message::GotoSubmit => {
                if let Some(session) = &mut self.session {
                    let target = controller::parse_page(&self.goto_field)
                        .and_then(|page| session.controller.goto(page));
                    if let Some(index) = target {
                        let landed = session.flipbook.flip_to(index);
                        return Task::done(Message::PageFlipped(landed));
                    }
                }
            }
            Message::GotoBookmark(page) => {
                if let Some(session) = &mut self.session {
                    if let Some(index) = session.controller.goto(page) {
                        let landed = session.flipbook.flip_to(index);
                        return Task::done(Message::PageFlipped(landed));
                    }
                }
            }
            Message::AddBookmark => {
                if let Some(session) = &mut self.session {
                    let page = session.controller.current_page();
                    let total = session.controller.total_pages();
                    session.bookmarks.add(page, total);
                }
            }
            Message::RemoveBookmark(index) => {
                if let Some(session) = &mut self.session {
                    session.bookmarks.remove(index);
                }
            }
            Message::ZoomIn => {
                if let Some(session) = &mut self.session {
                    session.zoom_in();
                }
            }
            Message::ZoomOut => {
                if let Some(session) = &mut self.session {
                    session.zoom_out();
                }
            }
            Message::WindowResized(height) => {
                // Only the next document load picks this up; the size model
                // initializes once per document.
                self.window_height = height;
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(iced::window::Event::Resized(size)) => {
                Some(Message::WindowResized(size.height))
            }
            _ => None,
        })
    }

    fn view(&self) -> Element<Message> {
        let Some(session) = &self.session else {
            // Pre-upload state; also where the app stays after a failed load.
            return container(
                column![
                    text("Pageflip").size(32),
                    text("Select a PDF file to read it as a flip book").size(16),
                    button("Open PDF").on_press(Message::OpenFile)
                ]
                .spacing(20)
                .align_x(iced::Alignment::Center),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
        };

        let reader = row![
            button("◀").on_press_maybe(session.controller.can_prev().then_some(Message::PrevPage)),
            container(book_view(session))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            button("▶").on_press_maybe(session.controller.can_next().then_some(Message::NextPage)),
        ]
        .spacing(10)
        .align_y(iced::Alignment::Center);

        let toolbar = row![
            button("Open").on_press(Message::OpenFile),
            horizontal_space(),
            text("Go to:"),
            text_input("page", &self.goto_field)
                .on_input(Message::GotoInput)
                .on_submit(Message::GotoSubmit)
                .width(Length::Fixed(60.0)),
            button("Bookmark").on_press(Message::AddBookmark),
            horizontal_space(),
            text(format!(
                "Page {} of {}",
                session.controller.current_page(),
                session.controller.total_pages()
            )),
            horizontal_space(),
            button("−").on_press(Message::ZoomOut),
            button("+").on_press(Message::ZoomIn),
        ]
        .spacing(10)
        .padding(10)
        .align_y(iced::Alignment::Center);

        let main_column = column![reader, toolbar].spacing(10).padding(10);

        if session.bookmarks.is_empty() {
            main_column.into()
        } else {
            row![sidebar_view(session), main_column].spacing(10).into()
        }
    }
}

/// The open spread: the current page and its facing page, drawn at the
/// surface's cached size. Clicking a page turns it, mirroring a manual flip.
fn book_view(session: &Session) -> Element<'_, Message> {
    let (width, height) = session.flipbook.size();
    let (left, right) = session.flipbook.spread();

    let mut spread = row![].spacing(4).align_y(iced::Alignment::Center);
    spread = spread.push(page_slot(session, left, width, height, Message::PrevPage));
    if let Some(right) = right {
        spread = spread.push(page_slot(session, right, width, height, Message::NextPage));
    }

    scrollable(spread).into()
}

fn page_slot(
    session: &Session,
    page_index: u16,
    width: f32,
    height: f32,
    on_press: Message,
) -> Element<'static, Message> {
    let content: Element<Message> = match session.page_image(page_index) {
        Some(handle) => img(handle).width(width).height(height).into(),
        None => container(text("")).width(width).height(height).into(),
    };
    mouse_area(content).on_press(on_press).into()
}

fn sidebar_view(session: &Session) -> Element<'_, Message> {
    let mut entries = column![text("Bookmarks").size(18)].spacing(10).padding(10);
    for (index, page) in session.bookmarks.iter().enumerate() {
        let header = row![
            text(format!("Page {}", page)).size(14),
            horizontal_space(),
            button("×").on_press(Message::RemoveBookmark(index)),
        ]
        .spacing(5)
        .align_y(iced::Alignment::Center);

        let mut entry = column![header].spacing(5);
        if let Some(thumb) = session.thumbnail(page) {
            entry = entry.push(
                mouse_area(img(thumb).width(Length::Fixed(100.0)))
                    .on_press(Message::GotoBookmark(page)),
            );
        }
        entries = entries.push(entry);
    }

    scrollable(entries)
        .width(Length::Fixed(150.0))
        .height(Length::Fill)
        .into()
}
