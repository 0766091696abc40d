use protractor::{AlignmentSpec, Degrees, Mm, PageSize, render_svg};
use svg2pdf::usvg;

fn parse(svg: &str) -> usvg::Tree {
    usvg::Tree::from_str(svg, &usvg::Options::default()).expect("rendered SVG parses")
}

fn spec() -> AlignmentSpec {
    AlignmentSpec::new("Thorens TD 160", "TP 16", Mm(212.0), Mm(17.0), Degrees(23.0))
}

#[test]
fn page_matches_the_selected_size() {
    for page in [PageSize::A4, PageSize::A3, PageSize::Letter] {
        let tree = parse(&render_svg(&spec().with_page_size(page)));
        let size = tree.size();
        let expected = page.dimensions();
        assert!((size.width() as f64 - expected.x).abs() < 0.01, "{page}");
        assert!((size.height() as f64 - expected.y).abs() < 0.01, "{page}");
    }
}

#[test]
fn larger_pages_have_larger_documents() {
    let a4 = parse(&render_svg(&spec())).size();
    let a3 = parse(&render_svg(&spec().with_page_size(PageSize::A3))).size();
    assert!(a3.width() > a4.width());
    assert!(a3.height() > a4.height());
}

#[test]
fn infeasible_geometry_renders_without_panicking() {
    let spec = AlignmentSpec::new("broken", "arm", Mm(100.0), Mm(500.0), Degrees(80.0));
    let tree = parse(&render_svg(&spec));
    assert!(tree.root().has_children());
}
