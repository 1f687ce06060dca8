mod actions;
mod render;

use streamdeck_lib::prelude::*;
use techpotato_stats::content;
use tracing::info;

use actions::{showcase::ShowcaseAction, stat::StatAction};

pub const PLUGIN_ID: &str = "net.techpotato.stats";

fn main() -> anyhow::Result<()> {
    let _guard = init(PLUGIN_ID);
    info!("Starting TechPotato stats Stream Deck plugin");

    let content = content::embedded();
    info!(
        company = %content.company().name,
        services = content.services().len(),
        "site content loaded"
    );

    let plugin = Plugin::new()
        .add_action(ActionFactory::default_of::<StatAction>())
        .add_action(ActionFactory::default_of::<ShowcaseAction>());

    run_plugin(plugin)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use serde_json::Value;

    const BUNDLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/net.techpotato.stats.sdPlugin");

    fn manifest() -> Value {
        let raw = std::fs::read_to_string(Path::new(BUNDLE).join("manifest.json")).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    fn assert_image(rel: &str) {
        for name in [format!("{rel}.png"), format!("{rel}@2x.png")] {
            assert!(Path::new(BUNDLE).join(&name).is_file(), "missing {name}");
        }
    }

    #[test]
    fn manifest_assets_ship() {
        let m = manifest();
        assert_eq!(m["UUID"], super::PLUGIN_ID);
        assert_image(m["Icon"].as_str().unwrap());
        assert_image(m["CategoryIcon"].as_str().unwrap());

        let actions = m["Actions"].as_array().unwrap();
        assert_eq!(actions.len(), 2);
        for action in actions {
            assert_image(action["Icon"].as_str().unwrap());
            for state in action["States"].as_array().unwrap() {
                assert_image(state["Image"].as_str().unwrap());
            }
            let pi = action["PropertyInspectorPath"].as_str().unwrap();
            assert!(Path::new(BUNDLE).join(pi).is_file(), "missing {pi}");
        }
    }

    #[test]
    fn manifest_action_ids_match_registered() {
        let m = manifest();
        let ids: Vec<&str> = m["Actions"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|a| a["UUID"].as_str())
            .collect();
        assert_eq!(ids, [crate::actions::ids::STAT, crate::actions::ids::SHOWCASE]);
    }
}
