//! Template fixtures shared by the integration tests.

/// Smoke-test templates, paths relative to the project root.
///
/// Namespaces: `tests` → `fixtures`, `jabba` → `fixtures/jabba`.
pub const SMOKE: &[(&str, &str)] = &[
    (
        "fixtures/mockup.twig",
        r#"<h1>{{ title | default(value="Default title") }}</h1>
{% include "@tests/include.twig" %}
{% include "jabba::jabba.twig" %}
{% include "./relative.twig" %}
<footer>{{ active_theme }}</footer>"#,
    ),
    ("fixtures/include.twig", r#"<section>Include {% include "@tests/nested-include.twig" %}</section>"#),
    ("fixtures/nested-include.twig", "<span>Nested include</span>"),
    ("fixtures/relative.twig", "<em>Relative include</em>"),
    ("fixtures/jabba/jabba.twig", "<strong>Jabba</strong>"),
    ("fixtures/error.twig", "{% if %}broken{% endif %}"),
    (
        "fixtures/error-include.twig",
        r#"<p>Before</p>{% include "@tests/error.twig" %}<p>After</p>"#,
    ),
    (
        "fixtures/menu.twig",
        r#"{% import "@tests/macros.twig" as menu %}<ul>{{ menu::item(label="Home", url="/") }}{{ menu::item(label="Contact", url="/contact") }}</ul>"#,
    ),
    (
        "fixtures/macros.twig",
        r#"{% macro item(label, url) %}<li><a href="{{ url }}">{{ label }}</a></li>{% endmacro item %}"#,
    ),
    (
        "fixtures/drupal-functions.twig",
        r#"<div class="{{ 'Primary Menu' | clean_class }}" id="{{ 'edit[field]' | clean_id }}">{{ testFunction() }} {{ "Hello @name" | t(name="Jabba") }}</div>"#,
    ),
];

/// A diamond: `diamond/a` includes `b` and `c`, both include `d`.
pub const DIAMOND: &[(&str, &str)] = &[
    ("diamond/a.twig", r#"A{% include "b.twig" %}{% include "c.twig" %}"#),
    ("diamond/b.twig", r#"B{% include "d.twig" %}"#),
    ("diamond/c.twig", r#"C{% include "d.twig" %}"#),
    ("diamond/d.twig", "D"),
];

/// Two templates including each other, reached from `cycle/root`.
pub const CYCLE: &[(&str, &str)] = &[
    ("cycle/root.twig", r#"{% include "ping.twig" %}"#),
    ("cycle/ping.twig", r#"ping {% if recurse %}{% include "pong.twig" %}{% endif %}"#),
    ("cycle/pong.twig", r#"pong {% if recurse %}{% include "ping.twig" %}{% endif %}"#),
];

/// A layout chain using `extends`, blocks and an embedded include.
pub const LAYOUT: &[(&str, &str)] = &[
    (
        "layout/base.twig",
        r#"<html><body>{% block content %}{% endblock content %}{% include "footer.twig" %}</body></html>"#,
    ),
    (
        "layout/page.twig",
        r#"{% extends "base.twig" %}{% block content %}<main>{% include "card.twig" %}</main>{% endblock content %}"#,
    ),
    ("layout/card.twig", r#"<article{{ attributes }}>{{ title }}</article>"#),
    ("layout/footer.twig", "<footer>fin</footer>"),
];
