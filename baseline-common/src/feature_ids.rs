//! Known WebStatus feature identifiers
//!
//! Auto-generated from the web-features package - do not edit manually.
//! 137 identifiers, sorted for binary search.
//!
//! The registry is diagnostic only: unknown ids are never rejected (the
//! upstream API is the authority on what exists). It powers a log hint for
//! probable typos and the demo page's suggestion list.

/// Known feature identifiers, ascending
pub const KNOWN_FEATURE_IDS: &[&str] = &[
    "accent-color",
    "anchor-positioning",
    "animation-composition",
    "appearance",
    "array-at",
    "array-by-copy",
    "array-findlast",
    "array-flat",
    "array-fromasync",
    "array-group",
    "aspect-ratio",
    "async-await",
    "async-clipboard",
    "audio-api",
    "autofocus",
    "avif",
    "backdrop-filter",
    "background-clip-text",
    "baseline-source",
    "bigint",
    "broadcast-channel",
    "cascade-layers",
    "char-boundaries",
    "checkvisibility",
    "clipboard-api",
    "color-function",
    "color-mix",
    "color-scheme",
    "container-queries",
    "content-visibility",
    "counters",
    "css-anchor-positioning",
    "currentcolor",
    "custom-properties",
    "declarative-shadow-dom",
    "details",
    "dialog",
    "display-contents",
    "document-picture-in-picture",
    "dynamic-import",
    "entries-api",
    "es6-module",
    "eventsource",
    "fetch",
    "fetch-priority",
    "field-sizing",
    "file-system-access",
    "flexbox",
    "flexbox-gap",
    "focus-visible",
    "font-display",
    "font-palette",
    "forced-colors",
    "form-associated-custom-elements",
    "fullscreen",
    "gap-decorations",
    "grid",
    "grid-animation",
    "has",
    "hwb",
    "idle-detection",
    "import-maps",
    "indexeddb",
    "individual-transforms",
    "inert",
    "input-event",
    "intersection-observer",
    "intl-segmenter",
    "is-pseudo",
    "js-modules-workers",
    "lazy-loading",
    "light-dark",
    "masks",
    "match-media",
    "media-queries",
    "mutation-observer",
    "nesting",
    "notifications",
    "object-fit",
    "offscreen-canvas",
    "overscroll-behavior",
    "page-transition-events",
    "paint-api",
    "passive-event-listeners",
    "pointer-events",
    "popover",
    "prefers-color-scheme",
    "prefers-reduced-motion",
    "promise-allsettled",
    "promise-any",
    "proxy-reflect",
    "push",
    "registered-custom-properties",
    "relative-color",
    "requestidlecallback",
    "resizable-buffers",
    "resize-observer",
    "scope",
    "scroll-behavior",
    "scroll-driven-animations",
    "scroll-snap",
    "scroll-timeline",
    "scrollbar-gutter",
    "selectlist",
    "service-workers",
    "shadow-dom",
    "shared-array-buffer",
    "streams",
    "structured-clone",
    "subgrid",
    "template",
    "text-wrap-balance",
    "text-wrap-pretty",
    "top-layer",
    "transforms",
    "transition-behavior",
    "trusted-types",
    "url",
    "urlpattern",
    "user-select",
    "variable-fonts",
    "view-timeline",
    "view-transitions",
    "web-animations",
    "web-bluetooth",
    "web-share",
    "webauthn",
    "webcodecs",
    "webgl2",
    "webgpu",
    "webrtc",
    "websockets",
    "webtransport",
    "webusb",
    "wheel-event",
    "where",
    "zstd",
];

/// Whether `id` appears in the generated registry
pub fn is_known(id: &str) -> bool {
    KNOWN_FEATURE_IDS.binary_search(&id).is_ok()
}

/// Number of identifiers in the registry
pub fn count() -> usize {
    KNOWN_FEATURE_IDS.len()
}
