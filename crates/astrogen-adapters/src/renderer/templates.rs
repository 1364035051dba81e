//! Built-in template bodies.
//!
//! Placeholders use `{{NAME}}` and are filled by [`fill`]. Blocks that vary
//! in shape (props, frontmatter) are computed by the renderer and passed in
//! as ready-made text.

pub const ASTRO_COMPONENT: &str = "---
{{FRONTMATTER}}---

<div class=\"{{FILE_NAME}}\">
  <slot />
</div>
";

pub const ASTRO_PAGE_WITH_LAYOUT: &str = "---
{{FRONTMATTER}}---

<{{LAYOUT}} title=\"{{TITLE}}\">
  <h1>{{TITLE}}</h1>
</{{LAYOUT}}>
";

pub const ASTRO_PAGE: &str = "---
{{FRONTMATTER}}---

<html lang=\"en\">
  <head>
    <meta charset=\"utf-8\" />
    <meta name=\"viewport\" content=\"width=device-width\" />
    <title>{{TITLE}}</title>
  </head>
  <body>
    <h1>{{TITLE}}</h1>
  </body>
</html>
";

pub const HTML_PAGE: &str = "<!doctype html>
<html lang=\"en\">
  <head>
    <meta charset=\"utf-8\" />
    <title>{{TITLE}}</title>
  </head>
  <body>
    <h1>{{TITLE}}</h1>
  </body>
</html>
";

pub const TS_ENDPOINT: &str = "import type { APIRoute } from 'astro';

export const GET: APIRoute = () => {
  return new Response(JSON.stringify({ name: '{{FILE_NAME}}' }), {
    headers: { 'Content-Type': 'application/json' },
  });
};
";

pub const JS_ENDPOINT: &str = "/** @type {import('astro').APIRoute} */
export const GET = () => {
  return new Response(JSON.stringify({ name: '{{FILE_NAME}}' }), {
    headers: { 'Content-Type': 'application/json' },
  });
};
";

pub const REACT_COMPONENT: &str = "{{INTERFACE}}export default function {{CLASS_NAME}}({{PARAMS}}) {
  return <div className=\"{{FILE_NAME}}\">{{CLASS_NAME}}</div>;
}
";

pub const VUE_COMPONENT: &str = "<script setup lang=\"ts\">
{{PROPS}}</script>

<template>
  <div class=\"{{FILE_NAME}}\">
    <slot />
  </div>
</template>
";

pub const SVELTE_COMPONENT: &str = "<script lang=\"ts\">
{{PROPS}}</script>

<div class=\"{{FILE_NAME}}\">
  <slot />
</div>
";

/// Replace every `{{KEY}}` with its value. Unknown placeholders are kept.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{{{key}}}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_replaces_every_occurrence() {
        assert_eq!(
            fill("{{A}} and {{A}} but {{B}}", &[("A", "x")]),
            "x and x but {{B}}"
        );
    }
}
