//! Batch export of the icon set.
//!
//! Renders every configured size in order and writes one PNG per size.
//! The first failure aborts the rest of the batch.

use std::fs;
use std::path::PathBuf;

use crate::error::{IconError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{render_icon, write_png, RenderOptions};
use crate::types::{IconPalette, IconSpec};

/// Writes `AppIcon-{label}x{label}.png` files into one directory.
#[derive(Debug, Clone)]
pub struct IconExporter {
    output: PathBuf,
    palette: IconPalette,
    options: RenderOptions,
}

impl IconExporter {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            palette: IconPalette::default(),
            options: RenderOptions::default(),
        }
    }

    pub fn with_palette(mut self, palette: IconPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Render and write a single icon, returning the written path.
    pub fn export_one(&self, spec: &IconSpec) -> Result<PathBuf> {
        let image = render_icon(spec.dimension(), &self.palette, self.options)?;
        let path = self.output.join(spec.file_name());
        write_png(&image, &path)?;
        Ok(path)
    }

    /// Export every spec in order, printing progress as it goes.
    pub fn export(&self, specs: &[IconSpec], printer: &Printer) -> Result<Vec<PathBuf>> {
        if !self.output.exists() {
            fs::create_dir_all(&self.output).map_err(|e| IconError::Io {
                path: self.output.clone(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }

        printer.banner("🎨", "Generating app icons...");

        let mut written = Vec::with_capacity(specs.len());
        for spec in specs {
            let path = self.export_one(spec)?;
            printer.success("Generated", &spec.file_name());
            written.push(path);
        }

        printer.blank();
        printer.banner("🎉", "All app icons generated successfully!");
        printer.note(&format!(
            "{} written to {}",
            plural(written.len(), "icon", "icons"),
            printer.cyan(&display_path(&self.output))
        ));
        print_next_steps(printer);

        Ok(written)
    }
}

fn print_next_steps(printer: &Printer) {
    printer.blank();
    printer.heading("Next steps:");
    let steps = [
        "Open Xcode",
        "Navigate to Assets.xcassets/AppIcon",
        "Drag and drop the generated PNG files into the corresponding slots",
        "Build and run to see your new app icon!",
    ];
    for (i, step) in steps.iter().enumerate() {
        printer.step(i + 1, step);
    }
}
