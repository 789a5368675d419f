#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Gourav Kumar Ojha · portfolio"),
        ..Default::default()
    };
    eframe::run_native(
        "verdant",
        options,
        Box::new(|cc| Ok(Box::new(verdant_ui::PortfolioApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start app: {e}"))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm build starts through `verdant_ui::start` instead.
}
