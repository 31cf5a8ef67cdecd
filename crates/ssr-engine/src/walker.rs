//! Custom element traversal
//!
//! Walks the body depth-first with an explicit worklist. Children are read
//! after their parent has been processed, so content spliced in by an
//! expansion is visited by the same walk and nested custom elements resolve
//! in a single pass.

use ssr_dom::{DomTree, NodeId};

use crate::{RenderError, Resources, TemplateRegistry, expand, fill_slots, is_custom_element};

/// Expand every registered custom element under `body`, collecting the
/// resources their templates emit.
///
/// `max_nesting` bounds how many expanded custom elements may enclose one
/// another; a template that reintroduces its own tag fails with
/// `RenderError::NestingLimit` instead of growing forever.
pub fn process_custom_elements(
    tree: &mut DomTree,
    body: NodeId,
    registry: &TemplateRegistry,
    max_nesting: usize,
) -> Result<Resources, RenderError> {
    let mut resources = Resources::default();
    let mut expanded_count = 0usize;

    // (node, number of expanded custom elements enclosing it)
    let mut stack = vec![(body, 0usize)];
    while let Some((id, depth)) = stack.pop() {
        let template = match tree.tag_name(id) {
            Some(tag) if is_custom_element(tag) => registry.get(tag),
            _ => None,
        };

        let mut child_depth = depth;
        if let Some(template) = template {
            if depth >= max_nesting {
                return Err(RenderError::NestingLimit {
                    tag: tree.tag_name(id).unwrap_or_default().to_string(),
                    limit: max_nesting,
                });
            }
            tracing::debug!(
                "Expanding <{}> at depth {}",
                tree.tag_name(id).unwrap_or_default(),
                depth
            );

            let expanded = expand(tree, id, template)?;
            resources.collect(&expanded);
            fill_slots(tree, id, &expanded);

            expanded_count += 1;
            child_depth = depth + 1;
        }

        // Push in reverse so the first child is visited next
        let before = stack.len();
        stack.extend(tree.children(id).map(|(child, _)| (child, child_depth)));
        stack[before..].reverse();
    }

    tracing::debug!("Expanded {} custom elements", expanded_count);
    Ok(resources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssr_html::{HtmlParser, HtmlSerializer};

    fn walk(markup: &str, registry: &TemplateRegistry) -> Result<String, RenderError> {
        let mut doc = HtmlParser::new().parse(markup).unwrap();
        let body = doc.body();
        process_custom_elements(doc.tree_mut(), body, registry, 16)?;
        Ok(HtmlSerializer::new().serialize_inner(doc.tree(), body))
    }

    #[test]
    fn test_unregistered_elements_untouched() {
        let registry = TemplateRegistry::new().with("my-known", |_| "<b>known</b>".to_string());

        assert_eq!(
            walk("<my-unknown><i>keep</i></my-unknown><font-face>x</font-face>", &registry).unwrap(),
            "<my-unknown><i>keep</i></my-unknown><font-face>x</font-face>"
        );
    }

    #[test]
    fn test_reserved_name_never_expanded() {
        let registry = TemplateRegistry::new().with("font-face", |_| "<b>expanded</b>".to_string());

        assert_eq!(walk("<font-face>x</font-face>", &registry).unwrap(), "<font-face>x</font-face>");
    }

    #[test]
    fn test_template_content_expanded_in_same_pass() {
        let registry = TemplateRegistry::new()
            .with("a-tag", |_| "<section><b-tag>inner</b-tag></section>".to_string())
            .with("b-tag", |_| "<em><slot></slot></em>".to_string());

        assert_eq!(
            walk("<a-tag></a-tag>", &registry).unwrap(),
            "<a-tag><section><b-tag><em>inner</em></b-tag></section></a-tag>"
        );
    }

    #[test]
    fn test_siblings_visited_in_document_order() {
        let registry = TemplateRegistry::new().with("my-n", |attrs| {
            format!("<span>{}</span>", attrs.get("n").cloned().unwrap_or_default())
        });

        assert_eq!(
            walk(r#"<my-n n="1"></my-n><div><my-n n="2"></my-n></div><my-n n="3"></my-n>"#, &registry).unwrap(),
            r#"<my-n n="1"><span>1</span></my-n><div><my-n n="2"><span>2</span></my-n></div><my-n n="3"><span>3</span></my-n>"#
        );
    }

    #[test]
    fn test_self_referential_template_hits_limit() {
        let registry = TemplateRegistry::new().with("my-loop", |_| "<my-loop></my-loop>".to_string());

        let err = walk("<my-loop></my-loop>", &registry).unwrap_err();
        assert!(matches!(err, RenderError::NestingLimit { ref tag, limit: 16 } if tag == "my-loop"));
    }
}
