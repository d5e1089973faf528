use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use storefront_core::catalog::{Catalog, CatalogView};
use storefront_core::category::{CategoriesFile, Category, CategoryNode, CategoryTree};
use storefront_core::config::Config;
use storefront_core::i18n::{locale_info, resolve, Direction, LocalizedString};
use storefront_core::style::{DirectionalStyle, LogicalSide};
use storefront_core::{Result, StorefrontError};

mod args;
use args::{CategoryAction, Cli, Commands, ConfigAction, Shell, StyleAction};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);
    tracing::debug!(base_dir = %base_dir.display(), "resolved base directory");
    let json = cli.json;

    let result = match cli.command {
        Some(Commands::Category { action }) => handle_category(action, &base_dir, json),
        Some(Commands::Resolve {
            locale,
            entries,
            fallback,
        }) => handle_resolve(&base_dir, &locale, &entries, fallback.as_deref(), json),
        Some(Commands::Style { action }) => handle_style(action, json),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "storefront", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("STOREFRONT_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".storefront"))
        .unwrap_or_else(|| PathBuf::from(".storefront"))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// =============================================================================
// category
// =============================================================================

fn handle_category(action: CategoryAction, base_dir: &Path, json: bool) -> Result<()> {
    let config = Config::load(base_dir)?;

    let load = || Catalog::from_config(&config, base_dir);

    match action {
        CategoryAction::Validate { file } => handle_validate(&config, base_dir, file)?,
        CategoryAction::Export { file, force } => handle_export(&config, base_dir, &file, force)?,
        CategoryAction::List { active, locale } => {
            let catalog = load()?;
            let view = catalog.view(locale.as_deref());
            let tree = catalog.tree();
            let categories = if active {
                tree.flatten_active()
            } else {
                tree.flatten()
            };
            if json {
                let localized: Vec<_> = categories.into_iter().map(|c| view.localize(c)).collect();
                return print_json(&localized);
            }
            println!();
            for category in categories {
                let indent = "  ".repeat(category.level as usize);
                println!("{}{}", indent, format_category(&view, category));
            }
            println!();
        }
        CategoryAction::Tree { locale } => {
            let catalog = load()?;
            let view = catalog.view(locale.as_deref());
            let nested = catalog.tree().nested();
            if json {
                return print_json(&nested);
            }
            println!();
            print_nodes(&view, &nested, "");
            println!();
        }
        CategoryAction::Show { slug, locale } => {
            let catalog = load()?;
            let view = catalog.view(locale.as_deref());
            let tree = catalog.tree();
            let category = tree
                .find_by_slug(&slug)
                .ok_or(StorefrontError::CategoryNotFound { key: slug.clone() })?;
            if json {
                return print_json(&view.localize(category));
            }
            print_category_details(&view, tree, category)?;
        }
        CategoryAction::Children { id, active, locale } => {
            let catalog = load()?;
            let view = catalog.view(locale.as_deref());
            let tree = catalog.tree();
            let children = if active {
                tree.children_of_active(&id)
            } else {
                tree.children_of(&id)
            };
            if json {
                let localized: Vec<_> = children.into_iter().map(|c| view.localize(c)).collect();
                return print_json(&localized);
            }
            if children.is_empty() {
                println!("No children for {}.", id.cyan());
                return Ok(());
            }
            for child in children {
                println!("  {}", format_category(&view, child));
            }
        }
        CategoryAction::Breadcrumbs { id, locale } => {
            let catalog = load()?;
            let view = catalog.view(locale.as_deref());
            if json {
                let trail = view
                    .breadcrumb_trail(&id)?
                    .ok_or(StorefrontError::CategoryNotFound { key: id.clone() })?;
                return print_json(&trail);
            }
            let labels = view
                .breadcrumb_labels(&id)?
                .ok_or(StorefrontError::CategoryNotFound { key: id.clone() })?;
            let separator = view.style().flip(" › ", " ‹ ");
            println!("{}", labels.join(separator));
        }
    }

    Ok(())
}

fn handle_validate(config: &Config, base_dir: &Path, file: Option<PathBuf>) -> Result<()> {
    let (source, tree) = match file {
        Some(path) => {
            let tree = CategoriesFile::load(&path)?.into_tree(config.catalog.max_depth)?;
            (path.display().to_string(), tree)
        }
        None => {
            let source = config
                .catalog_path(base_dir)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "builtin".to_string());
            (source, config.load_catalog(base_dir)?)
        }
    };

    let deepest = tree.flatten().iter().map(|c| c.level + 1).max().unwrap_or(0);
    let inactive = tree.flatten().iter().filter(|c| !c.is_active).count();
    println!("{} {}", "Valid:".green(), source);
    println!("  Categories: {}", tree.len());
    println!("  Roots:      {}", tree.roots().len());
    println!("  Levels:     {} (max {})", deepest, tree.max_depth());
    println!("  Inactive:   {}", inactive);
    Ok(())
}

fn handle_export(config: &Config, base_dir: &Path, file: &Path, force: bool) -> Result<()> {
    if file.exists() && !force {
        return Err(StorefrontError::FileExists {
            path: file.to_path_buf(),
        });
    }
    let tree = config.load_catalog(base_dir)?;
    CategoriesFile::from_tree(&tree).save(file)?;
    println!(
        "{} {} ({} categories)",
        "Exported:".green(),
        file.display(),
        tree.len()
    );
    Ok(())
}

fn format_category<'a>(view: &CatalogView<'a>, category: &'a Category) -> String {
    let mut line = format!(
        "{} {} {}",
        view.label(category).bold(),
        format!("[{}]", category.slug).dimmed(),
        format!("#{}", category.id).dimmed()
    );
    if !category.is_active {
        line.push_str(&format!(" {}", "(inactive)".yellow()));
    }
    line
}

fn print_nodes<'a>(view: &CatalogView<'a>, nodes: &[CategoryNode<'a>], prefix: &str) {
    for (i, node) in nodes.iter().enumerate() {
        let last = i + 1 == nodes.len();
        let (branch, next) = if prefix.is_empty() && node.category.is_root() {
            ("", "")
        } else if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        println!("{}{}{}", prefix, branch, format_category(view, node.category));
        print_nodes(view, &node.children, &format!("{}{}", prefix, next));
    }
}

fn print_category_details<'a>(
    view: &CatalogView<'a>,
    tree: &'a CategoryTree,
    category: &'a Category,
) -> Result<()> {
    println!();
    println!("  {}", view.label(category).cyan().bold());
    println!("    Id:       {}", category.id);
    println!("    Slug:     {}", category.slug);
    println!("    Level:    {}", category.level);
    println!("    Order:    {}", category.sort_order);
    println!(
        "    Active:   {}",
        if category.is_active { "yes" } else { "no" }
    );
    if let Some(description) = view.description(category) {
        println!("    About:    {}", description);
    }
    if let Some(labels) = view.breadcrumb_labels(&category.id)? {
        let separator = view.style().flip(" › ", " ‹ ");
        println!("    Path:     {}", labels.join(separator));
    }
    let children = tree.children_of(&category.id);
    if !children.is_empty() {
        println!("    Children: {}", children.len());
    }
    println!();
    Ok(())
}

// =============================================================================
// resolve
// =============================================================================

#[derive(Serialize)]
struct Resolution<'a> {
    locale: &'a str,
    fallback: &'a str,
    direction: Direction,
    text: &'a str,
}

fn handle_resolve(
    base_dir: &Path,
    locale: &str,
    entries: &[String],
    fallback: Option<&str>,
    json: bool,
) -> Result<()> {
    let content = parse_entries(entries)?;
    let config = Config::load(base_dir)?;
    let fallback = fallback.unwrap_or(config.locale.fallback.as_str());
    let text = resolve(&content, locale, fallback);

    if json {
        return print_json(&Resolution {
            locale,
            fallback,
            direction: Direction::for_locale(locale),
            text,
        });
    }
    println!("{}", text);
    Ok(())
}

fn parse_entries(entries: &[String]) -> Result<LocalizedString> {
    entries
        .iter()
        .map(|entry| {
            entry
                .split_once('=')
                .map(|(locale, text)| (locale.trim(), text))
                .filter(|(locale, _)| !locale.is_empty())
                .ok_or_else(|| StorefrontError::InvalidArgument {
                    message: format!("expected LOCALE=TEXT, got '{}'", entry),
                })
        })
        .collect()
}

// =============================================================================
// style
// =============================================================================

fn handle_style(action: StyleAction, json: bool) -> Result<()> {
    // Logical names and values do not depend on direction.
    let style = DirectionalStyle::default();

    match action {
        StyleAction::Property { name } => {
            let mapped = style.map_property(&name);
            if json {
                return print_json(&serde_json::json!({ "property": name, "logical": mapped }));
            }
            println!("{}", mapped);
        }
        StyleAction::Value { property, value } => {
            let mapped = style.map_value(&property, &value);
            if json {
                return print_json(&serde_json::json!({
                    "property": property,
                    "value": value,
                    "logical": mapped,
                }));
            }
            println!("{}", mapped);
        }
        StyleAction::Direction { locale } => {
            let style = DirectionalStyle::for_locale(&locale);
            let start = style.physical_side(LogicalSide::Start);
            let end = style.physical_side(LogicalSide::End);
            if json {
                return print_json(&serde_json::json!({
                    "locale": locale,
                    "direction": style.direction(),
                    "start": start,
                    "end": end,
                    "supported": locale_info(&locale).is_some(),
                }));
            }
            println!("{} {}", "Direction:".cyan(), style.direction());
            println!("  start → {}", start.as_str());
            println!("  end   → {}", end.as_str());
            match locale_info(&locale) {
                Some(info) => println!("  {} ({})", info.native_name, info.name),
                None => println!("  {}", "not a storefront locale".dimmed()),
            }
        }
        StyleAction::Map {
            locale,
            declarations,
        } => {
            let parsed = parse_declarations(&declarations)?;
            let style = DirectionalStyle::for_locale(&locale);
            let mapped = style.map_declarations(parsed);
            if json {
                return print_json(&mapped);
            }
            for (property, value) in mapped {
                println!("{}: {};", property, value);
            }
        }
    }

    Ok(())
}

fn parse_declarations(declarations: &[String]) -> Result<Vec<(&str, &str)>> {
    declarations
        .iter()
        .map(|decl| {
            decl.split_once(':')
                .map(|(property, value)| (property.trim(), value.trim()))
                .filter(|(property, _)| !property.is_empty())
                .ok_or_else(|| StorefrontError::InvalidArgument {
                    message: format!("expected PROPERTY:VALUE, got '{}'", decl),
                })
        })
        .collect()
}

// =============================================================================
// config
// =============================================================================

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(StorefrontError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entries_keeps_order() {
        let entries = vec!["he=ציוד טקטי".to_string(), "en=Tactical Gear".to_string()];
        let content = parse_entries(&entries).unwrap();
        assert_eq!(content.locales().collect::<Vec<_>>(), vec!["he", "en"]);
        assert_eq!(resolve(&content, "fr", "xx"), "ציוד טקטי");
    }

    #[test]
    fn test_parse_entries_allows_equals_in_text() {
        let entries = vec!["en=a=b".to_string()];
        let content = parse_entries(&entries).unwrap();
        assert_eq!(content.get("en"), Some("a=b"));
    }

    #[test]
    fn test_parse_entries_rejects_missing_locale() {
        assert!(parse_entries(&["=text".to_string()]).is_err());
        assert!(parse_entries(&["text".to_string()]).is_err());
    }

    #[test]
    fn test_parse_declarations() {
        let decls = vec!["marginLeft: 8px".to_string(), "textAlign:left".to_string()];
        let parsed = parse_declarations(&decls).unwrap();
        assert_eq!(parsed, vec![("marginLeft", "8px"), ("textAlign", "left")]);
        assert!(parse_declarations(&["nocolon".to_string()]).is_err());
    }

    #[test]
    fn test_resolve_base_dir_prefers_flag() {
        let base = resolve_base_dir(Some(PathBuf::from("/tmp/sf")));
        assert_eq!(base, PathBuf::from("/tmp/sf"));
    }

    #[test]
    fn test_cli_parses_breadcrumbs() {
        let cli = Cli::try_parse_from(["storefront", "category", "breadcrumbs", "1-1-1", "-l", "he"])
            .unwrap();
        match cli.command {
            Some(Commands::Category {
                action: CategoryAction::Breadcrumbs { id, locale },
            }) => {
                assert_eq!(id, "1-1-1");
                assert_eq!(locale.as_deref(), Some("he"));
            }
            _ => panic!("expected category breadcrumbs"),
        }
    }

    #[test]
    fn test_validate_and_export_roundtrip() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = Config::default();
        let file = temp.path().join("categories.toml");

        handle_export(&config, temp.path(), &file, false).unwrap();
        assert!(file.exists());
        assert!(matches!(
            handle_export(&config, temp.path(), &file, false),
            Err(StorefrontError::FileExists { .. })
        ));
        handle_validate(&config, temp.path(), Some(file)).unwrap();
    }
}
