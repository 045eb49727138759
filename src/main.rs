use std::{fs, io};

use clap::Parser;
use rpn_tree::tree::{Traversal, Tree};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// rpn-tree builds an expression tree from a postfix (RPN) expression and
/// prints its traversals, its value or a step-by-step evaluation trace.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpn-tree to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints the tree in the given order: inorder, preorder or postorder.
    #[arg(short, long)]
    traversal: Option<Traversal>,

    /// Prints the value of the expression. This is the default when no other
    /// output is requested.
    #[arg(short, long)]
    evaluate: bool,

    /// Prints one record per node in evaluation order.
    #[arg(short, long)]
    steps: bool,

    /// Indents the step records by depth instead of listing ids.
    #[arg(short, long, requires = "steps")]
    level: bool,

    /// Raises log verbosity: -d info, -dd debug, -ddd trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    contents: String,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.debug);

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|e| {
            eprintln!("Failed to read the input file '{}': {e}", &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    let tree = Tree::from_postfix(&expression).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    if let Some(order) = args.traversal {
        println!("{}", tree.traverse(order));
    }
    if args.steps
       && let Err(e) = tree.step_by_step_evaluation(&mut io::stdout().lock(), args.level)
    {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if args.evaluate || (args.traversal.is_none() && !args.steps) {
        println!("{}", tree.evaluate());
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG, when set, takes precedence over -d.
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

    tracing_subscriber::fmt().with_writer(io::stderr)
                             .with_target(true)
                             .with_env_filter(filter)
                             .init();
}
