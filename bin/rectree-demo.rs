use clap::Parser;
use colored::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rectree::{RTree, RTreeError, Rectangle, RectreeConfig, Result};
use tracing::{debug, info, Level};

#[derive(Parser, Debug)]
#[command(
    name = "rectree-demo",
    about = "Build a small R-tree over rectangles and run an overlap query",
    version
)]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = "rectree.toml")]
    config: String,

    /// 生成默认配置文件并退出
    #[arg(long)]
    generate_config: bool,

    /// Max children per node (overrides config file)
    #[arg(short = 'm', long)]
    max_children: Option<usize>,

    /// Log level (overrides config file)
    #[arg(long)]
    log_level: Option<String>,

    /// Query rectangle
    #[arg(
        long,
        num_args = 4,
        value_names = ["MIN_X", "MIN_Y", "MAX_X", "MAX_Y"],
        allow_negative_numbers = true
    )]
    query: Option<Vec<f64>>,

    /// Insert this many extra random unit rectangles
    #[arg(long, default_value_t = 0)]
    random: usize,

    /// Seed for --random
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print the tree as JSON
    #[arg(long)]
    json: bool,

    /// Print the tree structure
    #[arg(long)]
    tree: bool,

    /// 打印生效的配置
    #[arg(long)]
    show_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 生成默认配置文件
    if args.generate_config {
        let config = RectreeConfig::default();
        config.save_to_file(&args.config)?;
        println!("✅ Generated default configuration: {}", args.config);
        return Ok(());
    }

    // 加载配置
    let mut config = RectreeConfig::from_file(&args.config)?;

    // 命令行参数覆盖配置文件
    if let Some(max_children) = args.max_children {
        config.index.max_children = max_children;
    }
    if let Some(log_level) = args.log_level {
        config.logging.level = log_level;
    }

    // 验证配置
    config.validate()?;

    if args.show_config {
        config.print_summary();
    }

    // 初始化日志系统
    init_logging(&config.logging)?;
    debug!(?config, "loaded configuration");

    let mut rtree = RTree::from_config(&config.index)?;
    info!(max_children = rtree.max_children(), "created R-tree");

    for rect in [
        Rectangle::new(0.0, 0.0, 1.0, 1.0)?,
        Rectangle::new(2.0, 2.0, 3.0, 3.0)?,
        Rectangle::new(4.0, 4.0, 5.0, 5.0)?,
    ] {
        rtree.insert(rect);
    }

    if args.random > 0 {
        let mut rng = StdRng::seed_from_u64(args.seed);
        for _ in 0..args.random {
            let x = rng.gen_range(-100.0..100.0);
            let y = rng.gen_range(-100.0..100.0);
            rtree.insert(Rectangle::new(x, y, x + 1.0, y + 1.0)?);
        }
    }
    info!(len = rtree.len(), depth = rtree.depth(), "inserted rectangles");

    let query = match args.query.as_deref() {
        Some(&[min_x, min_y, max_x, max_y]) => Rectangle::new(min_x, min_y, max_x, max_y)?,
        _ => Rectangle::new(2.5, 2.5, 4.5, 4.5)?,
    };

    let results = rtree.search(&query);
    println!(
        "Found {} rectangles that overlap with {}",
        results.len().to_string().cyan(),
        query.to_string().yellow()
    );
    for rect in &results {
        println!("{}", rect.to_string().green());
    }

    if args.tree {
        println!();
        print!("{}", rtree.print_tree_structure());
    }

    if args.json {
        let json = rtree
            .export_to_json()
            .map_err(|e| RTreeError::Config(format!("Failed to export JSON: {}", e)))?;
        println!("{}", json);
    }

    Ok(())
}

/// 初始化日志系统
fn init_logging(config: &rectree::LoggingConfig) -> Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    match (config.output.as_str(), &config.log_file) {
        ("file", Some(log_file)) => {
            // 确保日志目录存在
            if let Some(parent) = log_file.parent() {
                let _ = std::fs::create_dir_all(parent);
            }

            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .map_err(|e| {
                    RTreeError::Config(format!(
                        "Failed to open log file '{}': {}",
                        log_file.display(),
                        e
                    ))
                })?;

            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::sync::Mutex::new(file))
                        .with_target(false),
                )
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
    }

    Ok(())
}
