use sdl2::keyboard::Keycode;
use softcanvas::display::{Display, InputEvent, RenderTarget, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use softcanvas::util::FpsCounter;
use softcanvas::{PixelBuffer, Sketch};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const DEFAULT_SKETCH_PATH: &str = "sketch.json";
const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(2);

struct Options {
    width: u32,
    height: u32,
    vsync: bool,
    sketch_path: PathBuf,
}

/// Parse command line arguments
fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = Options {
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        vsync: true,
        sketch_path: PathBuf::from(DEFAULT_SKETCH_PATH),
    };

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--no-vsync" => opts.vsync = false,
            "--width" | "-w" => {
                if let Some(w) = value.and_then(|v| v.parse().ok()) {
                    opts.width = w;
                }
                i += 1;
            },
            "--height" | "-h" => {
                if let Some(h) = value.and_then(|v| v.parse().ok()) {
                    opts.height = h;
                }
                i += 1;
            },
            "--resolution" | "-r" => {
                // WxH, e.g. 1280x720
                if let Some((w, h)) = value.and_then(|v| v.split_once('x')) {
                    if let (Ok(w), Ok(h)) = (w.parse(), h.parse()) {
                        opts.width = w;
                        opts.height = h;
                    }
                }
                i += 1;
            },
            "--sketch" | "-s" => {
                if let Some(path) = value {
                    opts.sketch_path = PathBuf::from(path);
                }
                i += 1;
            },
            "--help" => {
                println!("Usage: softcanvas [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --width W, -w W           Window width (default: {})", DEFAULT_WIDTH);
                println!("  --height H, -h H          Window height (default: {})", DEFAULT_HEIGHT);
                println!("  --resolution WxH, -r WxH  Set both at once (e.g. 1280x720)");
                println!(
                    "  --sketch PATH, -s PATH    Sketch JSON to show (default: {})",
                    DEFAULT_SKETCH_PATH
                );
                println!("  --no-vsync                Uncapped framerate");
                println!("  --help                    Show this help message");
                println!();
                println!("Keys: S save sketch, L reload sketch, F toggle FPS log, Escape quit");
                std::process::exit(0);
            },
            other => log::warn!("ignoring unknown argument '{}'", other),
        }
        i += 1;
    }

    opts
}

/// Load the sketch at `path`, or fall back to the built-in demo
fn load_or_demo(opts: &Options) -> Sketch {
    match Sketch::load(&opts.sketch_path) {
        Ok(sketch) => sketch,
        Err(e) => {
            log::warn!(
                "could not load {}: {}; showing demo sketch",
                opts.sketch_path.display(),
                e
            );
            Sketch::demo(opts.width, opts.height)
        },
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = parse_args();

    let (mut display, texture_creator) =
        Display::with_options("softcanvas", opts.width, opts.height, opts.vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, opts.width, opts.height)?;
    let mut buffer = PixelBuffer::with_size(opts.width, opts.height).map_err(|e| e.to_string())?;

    let mut sketch = load_or_demo(&opts);
    log::info!("showing sketch '{}' ({} shapes)", sketch.name, sketch.shapes.len());

    let mut fps_counter = FpsCounter::new(60);
    let mut report_fps = false;
    let mut last_report = Instant::now();

    'main: loop {
        let (_dt, avg_fps) = fps_counter.tick();

        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::KeyDown(Keycode::S) => match sketch.save(&opts.sketch_path) {
                    Ok(()) => log::info!("sketch saved to {}", opts.sketch_path.display()),
                    Err(e) => log::error!("failed to save sketch: {}", e),
                },
                InputEvent::KeyDown(Keycode::L) => match Sketch::load(&opts.sketch_path) {
                    Ok(loaded) => {
                        sketch = loaded;
                        log::info!("sketch loaded from {}", opts.sketch_path.display());
                    },
                    Err(e) => log::error!("failed to load sketch: {}", e),
                },
                InputEvent::KeyDown(Keycode::F) => report_fps = !report_fps,
                InputEvent::KeyDown(_) => {},
            }
        }

        sketch.render(&mut buffer);

        if report_fps && last_report.elapsed() >= FPS_REPORT_INTERVAL {
            let (min_fps, max_fps) = fps_counter.min_max_fps();
            log::info!(
                "FPS {:.0} avg  {:.0} min  {:.0} max  {:.1}ms",
                avg_fps,
                min_fps,
                max_fps,
                fps_counter.avg_frame_time_ms()
            );
            last_report = Instant::now();
        }

        display.present(&mut target, &buffer)?;
    }

    Ok(())
}
