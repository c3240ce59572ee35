//! The canonical descriptor for the Vue3 internals documentation site.

use crate::head::HeadTag;
use crate::sidebar::SidebarGroup;
use crate::site::{MarkdownOptions, SiteConfig};

/// The embedded literal descriptor.
///
/// This is the whole configuration surface of the site: the external
/// generator reads it once at build start and renders navigation and
/// `<head>` content from it. Callers should still run
/// [`SiteConfig::validate`] after construction so content edits that
/// break the sidebar invariants fail the build early.
pub fn canonical() -> SiteConfig {
    SiteConfig {
        title: "Vue3.0 JS".to_string(),
        description: "下一代web开发方式，更快，更轻，易维护，更多的原生支持".to_string(),
        head_injections: vec![
            HeadTag::new("link", [("rel", "icon"), ("href", "/onepunch.jpeg")]),
            HeadTag::new(
                "meta",
                [
                    ("name", "keywords"),
                    (
                        "content",
                        "vue3中文, vue3js文档, vue3资料, vue3 vue-composition-api, vuecli,vue-cli,vue-cli文档,vue-cli学习,vue文档,vue中文,vue学习,前端开发,vue框架,vue社区",
                    ),
                ],
            ),
            HeadTag::new(
                "script",
                [(
                    "src",
                    "https://hm.baidu.com/hm.js?db1f163122162bcdb6d04f76b5c1df17",
                )],
            ),
        ],
        repo_url: Some("vueClub/vue3doc".to_string()),
        repo_label: Some("Github".to_string()),
        docs_repo_url: Some("vueClub/vue3doc".to_string()),
        docs_dir: "docs".to_string(),
        docs_branch: "master".to_string(),
        edit_links_enabled: true,
        edit_link_text: "帮助我们改善此页面！".to_string(),
        sidebar_groups: sidebar(),
        markdown_options: MarkdownOptions { line_numbers: true },
    }
}

fn sidebar() -> Vec<SidebarGroup> {
    vec![
        SidebarGroup::pinned("阅前必读", &[("start/", "写在最前面")]),
        SidebarGroup::pinned(
            "前置知识",
            &[
                ("es6/", "Proxy"),
                ("es6/dataStructure", "Set、Map、WeakSet、WeakMap"),
                ("es6/typeScript", "typeScript语法"),
                ("es6/spec", "spec语法"),
            ],
        ),
        SidebarGroup::pinned("全局Api", &[("global/", "global")]),
        SidebarGroup {
            depth: Some(2),
            ..SidebarGroup::pinned(
                "响应式系统",
                &[
                    ("reactivity/", "整体概览"),
                    ("reactivity/reactive", "reactive"),
                    ("reactivity/reactive.spec", "reactive.spec"),
                    ("reactivity/ref", "ref"),
                    ("reactivity/ref.spec", "ref.spec"),
                    ("reactivity/baseHandlers", "baseHandlers"),
                    ("reactivity/effect", "effect"),
                    ("reactivity/effect.spec", "effect.spec"),
                    ("reactivity/computed", "computed"),
                    ("reactivity/computed.spec", "computed.spec"),
                ],
            )
        },
        SidebarGroup::pinned("编绎模块", &[("compiler/", "compiler")]),
        SidebarGroup::pinned("Runtime", &[("runtime/", "runtime")]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canonical_descriptor_validates() {
        canonical().validate().unwrap();
    }

    #[test]
    fn sidebar_paths_are_unique() {
        let config = canonical();
        let paths = config.sidebar_paths();

        let unique: std::collections::HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
    }

    #[test]
    fn first_group_matches_source_site() {
        let config = canonical();

        let group = &config.sidebar_groups[0];
        assert_eq!(group.title, "阅前必读");
        assert!(!group.collapsible);
        assert_eq!(group.children.len(), 1);
        assert_eq!(group.children[0].path, "start/");
        assert_eq!(group.children[0].label, "写在最前面");
    }

    #[test]
    fn reactivity_group_carries_depth() {
        let config = canonical();

        let group = config
            .sidebar_groups
            .iter()
            .find(|g| g.title == "响应式系统")
            .unwrap();

        assert_eq!(group.depth, Some(2));
        assert_eq!(group.children.len(), 10);
    }

    #[test]
    fn head_injections_match_source_site() {
        let config = canonical();

        assert_eq!(config.head_injections.len(), 3);
        assert_eq!(config.head_injections[0].tag, "link");
        assert_eq!(config.head_injections[0].attr("rel"), Some("icon"));
        assert_eq!(config.head_injections[2].tag, "script");
    }
}
