use crate::reports;
use clap::Args;
use phigauge::config::ScoringParams;
use phigauge::error::{PgResult, PhiError};
use phigauge::geometry::{self, Selection};
use phigauge::imaging::{self, ImageInfo};
use phigauge::report::Report;
use phigauge::scorer::Scorer;
use phigauge::session::Session;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct MeasureArgs {
    #[command(flatten)]
    pub params: ScoringParams,

    /// Image the selection refers to (enables bounds checks and --crop).
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// Selection corners in image pixels: x0,y0,x1,y1
    #[arg(short, long, conflicts_with_all = ["drag", "width", "height"])]
    pub select: Option<String>,

    /// Drag gesture: press point and release point, x,y:x,y
    #[arg(short, long, allow_hyphen_values = true, conflicts_with_all = ["width", "height"])]
    pub drag: Option<String>,

    /// Size (WxH) of the surface the drag was made on, when it was scaled.
    #[arg(long, requires = "drag")]
    pub display: Option<String>,

    #[arg(short = 'W', long, requires = "height")]
    pub width: Option<u32>,

    #[arg(short = 'H', long, requires = "width")]
    pub height: Option<u32>,

    /// Write the plain-text report here (".json" writes JSON instead).
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Save the selected region as a new image. Needs a located region.
    #[arg(long, requires = "image", conflicts_with_all = ["width", "height"])]
    pub crop: Option<PathBuf>,

    /// Print the result as JSON on stdout.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: MeasureArgs, scorer: Scorer) -> PgResult<()> {
    let mut session = Session::new(scorer);

    if let Some(path) = &args.image {
        info!("📂 Loading image: {}", path.display());
        session.load_image(ImageInfo::probe(path)?);
    }

    let report = match resolve_selection(&args, session.image())? {
        Some(selection) => {
            session.select(selection)?;
            session.calculate()?.clone()
        }
        None => {
            // Bare dimensions: nothing to locate on the image.
            let (w, h) = (args.width.unwrap_or(0), args.height.unwrap_or(0));
            let m = session.scorer().evaluate(w, h)?;
            Report::new(m, None)
        }
    };

    if let (Some(dest), Some(src), Some(sel)) = (&args.crop, &args.image, &report.selection) {
        imaging::crop_to_file(src, sel, dest)?;
    }

    if let Some(path) = &args.report {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            report.write_json(path)?;
        } else {
            report.write_text(path)?;
        }
    }

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        reports::print_measurement(&report, session.image());
        reports::print_status_legend(&session.scorer().params);
    }
    Ok(())
}

/// Turns whichever region flag was given into a selection; `None` means the
/// caller passed bare --width/--height.
fn resolve_selection(args: &MeasureArgs, image: Option<&ImageInfo>) -> PgResult<Option<Selection>> {
    if let Some(spec) = &args.select {
        return Ok(Some(spec.parse()?));
    }

    if let Some(spec) = &args.drag {
        let (mut start, mut end) = geometry::parse_drag(spec)?;
        if let Some(display) = &args.display {
            let img = image.ok_or_else(|| {
                PhiError::InvalidSelection("--display needs --image to rescale the drag".to_string())
            })?;
            let display = geometry::parse_size(display)?;
            start = geometry::map_display_point(start, display, img.size())?;
            end = geometry::map_display_point(end, display, img.size())?;
        }
        return Ok(Some(Selection::from_drag(start, end)?));
    }

    if args.width.is_some() && args.height.is_some() {
        return Ok(None);
    }

    Err(PhiError::NoSelection)
}
