//! nav-link command line.
//!
//! Evaluates a single navigation link against a request path using the
//! routes and defaults from a config file, and prints either the evaluated
//! link as JSON or its HTML.
//!
//! ```text
//! nav-link --config nav.toml check --current '/posts/5' --controller posts --controller-segment 1
//! nav-link render --title Posts --current '/posts?page=2' --link /posts --ignore-params page
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use nav_link::config::{load_config, NavConfig};
use nav_link::matching::{Condition, MatchOptions};
use nav_link::observability::logging::init_logging;
use nav_link::{HtmlRenderer, LinkEvaluator, LinkTarget, RequestContext, RouteParams};

#[derive(Parser)]
#[command(name = "nav-link")]
#[command(about = "Decide whether a navigation link is the current location", long_about = None)]
struct Cli {
    /// TOML file with defaults and routes.
    #[arg(short, long, env = "NAV_LINK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the evaluated link as JSON
    Check(LinkArgs),
    /// Print the link as HTML
    Render {
        /// Link text.
        #[arg(short, long)]
        title: String,

        #[command(flatten)]
        link: LinkArgs,
    },
}

#[derive(Args)]
struct LinkArgs {
    /// Current request path including query.
    #[arg(long)]
    current: String,

    /// Link target as a raw path.
    #[arg(long, conflicts_with_all = ["controller", "action", "id", "param"])]
    link: Option<String>,

    #[arg(long)]
    controller: Option<String>,

    #[arg(long)]
    action: Option<String>,

    #[arg(long)]
    id: Option<String>,

    /// Query parameter for a route target (KEY=VALUE).
    #[arg(long, value_parser = parse_pair)]
    param: Vec<(String, String)>,

    /// Query parameters to ignore, or "all".
    #[arg(long, value_delimiter = ',')]
    ignore_params: Vec<String>,

    /// Only these query parameters take part in matching.
    #[arg(long, value_delimiter = ',')]
    use_params: Vec<String>,

    /// Only these parameter values take part in matching (KEY=VALUE).
    #[arg(long, value_parser = parse_pair, conflicts_with = "use_params")]
    use_param_value: Vec<(String, String)>,

    /// Match on the Nth (1-based) component of the endpoint name.
    #[arg(long, conflicts_with = "url_segment")]
    controller_segment: Option<usize>,

    /// Match on the Nth (0-based) component of the path.
    #[arg(long)]
    url_segment: Option<usize>,

    /// Gate selection with a fixed answer.
    #[arg(long)]
    and_condition: Option<bool>,

    /// Force selection with a fixed answer.
    #[arg(long)]
    or_condition: Option<bool>,

    #[arg(long)]
    selected_class: Option<String>,

    #[arg(long, conflicts_with = "no_wrapper")]
    wrapper: Option<String>,

    #[arg(long)]
    no_wrapper: bool,

    #[arg(long, conflicts_with = "no_wrapper_class")]
    wrapper_class: Option<String>,

    #[arg(long)]
    no_wrapper_class: bool,

    /// Class attribute already on the link.
    #[arg(long)]
    class: Option<String>,

    /// Extra anchor attribute (KEY=VALUE).
    #[arg(long, value_parser = parse_pair)]
    attr: Vec<(String, String)>,
}

impl LinkArgs {
    fn request(&self) -> RequestContext {
        RequestContext::new(self.current.as_str())
    }

    fn target(&self) -> LinkTarget {
        if let Some(link) = &self.link {
            return LinkTarget::Path(link.clone());
        }
        LinkTarget::Route(RouteParams {
            controller: self.controller.clone(),
            action: self.action.clone(),
            id: self.id.clone(),
            query: self.param.iter().cloned().collect(),
        })
    }

    fn options(&self) -> MatchOptions {
        let mut options = MatchOptions::new();

        if self.ignore_params.iter().any(|p| p == "all") {
            options = options.ignore_all_params();
        } else if !self.ignore_params.is_empty() {
            options = options.ignore_params(self.ignore_params.iter().cloned());
        }
        if !self.use_params.is_empty() {
            options = options.use_params(self.use_params.iter().cloned());
        }
        if !self.use_param_value.is_empty() {
            options = options.use_param_values(self.use_param_value.iter().cloned());
        }

        if let Some(position) = self.controller_segment {
            options = options.controller_segment(position);
        } else if let Some(position) = self.url_segment {
            options = options.url_segment(position);
        }

        if let Some(answer) = self.and_condition {
            options = options.and_condition(Condition::new(move || answer));
        }
        if let Some(answer) = self.or_condition {
            options = options.or_condition(Condition::new(move || answer));
        }

        if let Some(class) = &self.selected_class {
            options = options.selected_class(class.as_str());
        }
        if self.no_wrapper {
            options = options.without_wrapper();
        } else if let Some(wrapper) = &self.wrapper {
            options = options.wrapper(wrapper.as_str());
        }
        if self.no_wrapper_class {
            options = options.without_wrapper_class();
        } else if let Some(class) = &self.wrapper_class {
            options = options.wrapper_class(class.as_str());
        }
        options
    }

    fn html_attributes(&self) -> BTreeMap<String, String> {
        let mut attributes: BTreeMap<String, String> = self.attr.iter().cloned().collect();
        if let Some(class) = &self.class {
            attributes.insert("class".to_string(), class.clone());
        }
        attributes
    }
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got {raw:?}")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => NavConfig::default(),
    };
    init_logging(&config.observability);

    tracing::debug!(
        selected_class = %config.defaults.selected_class,
        wrapper = ?config.defaults.wrapper,
        routes = config.routes.len(),
        "Configuration loaded"
    );

    let evaluator = LinkEvaluator::from_config(&config);

    match &cli.command {
        Commands::Check(args) => {
            let link = evaluator.link(
                &args.request(),
                &args.target(),
                &args.options(),
                &args.html_attributes(),
            )?;
            println!("{}", serde_json::to_string_pretty(&link)?);
        }
        Commands::Render { title, link: args } => {
            let html = evaluator.render(
                title,
                &args.request(),
                &args.target(),
                &args.options(),
                &args.html_attributes(),
                &HtmlRenderer,
            )?;
            println!("{html}");
        }
    }

    Ok(())
}
