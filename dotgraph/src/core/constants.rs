//! The attribute names and output formats that GraphViz understands.

/// Attributes that apply to graphs and subgraphs.
pub const GRAPH_ATTRIBUTES: &[&str] = &[
    "Damping", "K", "URL", "aspect", "bb", "bgcolor", "center", "charset",
    "clusterrank", "colorscheme", "comment", "compound", "concentrate",
    "defaultdist", "dim", "dimen", "diredgeconstraints", "dpi", "epsilon",
    "esep", "fontcolor", "fontname", "fontnames", "fontpath", "fontsize", "id",
    "label", "labeljust", "labelloc", "landscape", "layers", "layersep",
    "layout", "levels", "levelsgap", "lheight", "lp", "lwidth", "margin",
    "maxiter", "mclimit", "mindist", "mode", "model", "mosek", "nodesep",
    "nojustify", "normalize", "nslimit", "nslimit1", "ordering", "orientation",
    "outputorder", "overlap", "overlap_scaling", "pack", "packmode", "pad",
    "page", "pagedir", "quadtree", "quantum", "rankdir", "ranksep", "ratio",
    "remincross", "repulsiveforce", "resolution", "root", "rotate",
    "searchsize", "sep", "showboxes", "size", "smoothing", "sortv", "splines",
    "start", "stylesheet", "target", "truecolor", "viewport", "voro_margin",
    "rank",
];

/// Attributes that apply to edges.
pub const EDGE_ATTRIBUTES: &[&str] = &[
    "URL", "arrowhead", "arrowsize", "arrowtail", "color", "colorscheme",
    "comment", "constraint", "decorate", "dir", "edgeURL", "edgehref",
    "edgetarget", "edgetooltip", "fontcolor", "fontname", "fontsize", "headURL",
    "headclip", "headhref", "headlabel", "headport", "headtarget",
    "headtooltip", "href", "id", "label", "labelURL", "labelangle",
    "labeldistance", "labelfloat", "labelfontcolor", "labelfontname",
    "labelfontsize", "labelhref", "labeltarget", "labeltooltip", "layer", "len",
    "lhead", "lp", "ltail", "minlen", "nojustify", "penwidth", "pos",
    "samehead", "sametail", "showboxes", "style", "tailURL", "tailclip",
    "tailhref", "taillabel", "tailport", "tailtarget", "tailtooltip", "target",
    "tooltip", "weight", "rank",
];

/// Attributes that apply to nodes. Includes the `dot2tex` extensions.
pub const NODE_ATTRIBUTES: &[&str] = &[
    "URL", "color", "colorscheme", "comment", "distortion", "fillcolor",
    "fixedsize", "fontcolor", "fontname", "fontsize", "group", "height", "id",
    "image", "imagescale", "label", "labelloc", "layer", "margin", "nojustify",
    "orientation", "penwidth", "peripheries", "pin", "pos", "rects", "regular",
    "root", "samplepoints", "shape", "shapefile", "showboxes", "sides", "skew",
    "sortv", "style", "target", "tooltip", "vertices", "width", "z", "texlbl",
    "texmode",
];

/// Attributes that apply to clusters, on top of the graph attributes.
pub const CLUSTER_ATTRIBUTES: &[&str] = &[
    "K", "URL", "bgcolor", "color", "colorscheme", "fillcolor", "fontcolor",
    "fontname", "fontsize", "label", "labeljust", "labelloc", "lheight", "lp",
    "lwidth", "nojustify", "pencolor", "penwidth", "peripheries", "sortv",
    "style", "target", "tooltip",
];

/// The `-T` formats that the layout programs can produce.
pub const OUTPUT_FORMATS: &[&str] = &[
    "canon", "cmap", "cmapx", "cmapx_np", "dia", "dot", "fig", "gd", "gd2",
    "gif", "hpgl", "imap", "imap_np", "ismap", "jpe", "jpeg", "jpg", "mif",
    "mp", "pcl", "pdf", "pic", "plain", "plain-ext", "png", "ps", "ps2", "svg",
    "svgz", "vml", "vmlz", "vrml", "vtx", "wbmp", "xdot", "xlib",
];

/// The layout programs that ship with GraphViz.
pub const DEFAULT_PROGRAMS: &[&str] = &[
    "dot", "twopi", "neato", "circo", "fdp", "sfdp",
];
/// The format that writes the DOT text itself instead of invoking a program.
pub const RAW_FORMAT: &str = "raw";

pub fn is_output_format(format: &str) -> bool {
    format == RAW_FORMAT || OUTPUT_FORMATS.contains(&format)
}

#[test]
fn test_tables() {
    assert!(GRAPH_ATTRIBUTES.contains(&"rankdir"));
    assert!(NODE_ATTRIBUTES.contains(&"texlbl"));
    assert!(EDGE_ATTRIBUTES.contains(&"decorate"));
    assert!(CLUSTER_ATTRIBUTES.contains(&"pencolor"));
    assert!(is_output_format("svg"));
    assert!(is_output_format("raw"));
    assert!(!is_output_format("docx"));
    assert_eq!(DEFAULT_PROGRAMS.len(), 6);
}
