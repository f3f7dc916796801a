use anyhow::Result;
use folio::config::GallerySettings;
use folio::gallery::ProjectsGallery;
use gpui::*;
use gpui_component::Root;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info")),
        )
        .init();

    let settings = GallerySettings::load();

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        if let Err(e) = open_gallery_window(settings, cx) {
            tracing::error!("Failed to open window: {}", e);
            cx.quit();
        }
    });
}

fn open_gallery_window(settings: GallerySettings, cx: &mut App) -> Result<()> {
    let bounds = Bounds::centered(None, size(px(1200.0), px(760.0)), cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        ..Default::default()
    };

    cx.open_window(options, |window, cx| {
        let gallery = cx.new(|cx| ProjectsGallery::new(settings, window, cx));
        cx.new(|cx| Root::new(AnyView::from(gallery), window, cx))
    })?;
    cx.activate(true);
    Ok(())
}
