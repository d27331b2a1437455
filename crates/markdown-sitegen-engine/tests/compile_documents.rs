use markdown_sitegen_engine::{
    BlockType, MarkdownError, SpanKind, TextSpan, compile_markdown_to_html, extract_title,
    markdown_to_html, parse_document, render, tokenize,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn title_and_body() {
    let md = "# Title\n\nbody text";
    assert_eq!(extract_title(md).unwrap(), "Title");

    let root = compile_markdown_to_html(md).unwrap();
    let tags: Vec<_> = root.children().iter().map(|c| c.tag()).collect();
    assert_eq!(tags, vec![Some("h1"), Some("p")]);
    insta::assert_snapshot!(render(&root).unwrap(), @"<div><h1>Title</h1><p>body text</p></div>");
}

#[test]
fn single_line_code_block() {
    let html = markdown_to_html("```code here```").unwrap();
    insta::assert_snapshot!(html, @"<div><pre><code>code here</code></pre></div>");
}

#[test]
fn multi_line_fence_is_a_paragraph_with_inline_code() {
    let html = markdown_to_html("```\nlet x = 1;\n```").unwrap();
    assert_eq!(html, "<div><p><code>\nlet x = 1;\n</code></p></div>");
}

#[test]
fn overflowing_list_number_is_a_paragraph() {
    let html = markdown_to_html("# Log\n\n20231231235959123456789. was the build id\n\nafter").unwrap();
    assert_eq!(
        html,
        "<div><h1>Log</h1><p>20231231235959123456789. was the build id</p><p>after</p></div>"
    );
}

#[test]
fn lone_image() {
    assert_eq!(
        tokenize("![alt](u.png)").unwrap(),
        vec![TextSpan::image("alt", "u.png")]
    );
    let html = markdown_to_html("![alt](u.png)").unwrap();
    insta::assert_snapshot!(html, @r#"<div><p><img src="u.png" alt="alt"></img></p></div>"#);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\n\t\n")]
fn blank_documents_are_rejected(#[case] md: &str) {
    assert_eq!(
        compile_markdown_to_html(md),
        Err(MarkdownError::EmptyDocument)
    );
}

#[rstest]
#[case("just a line of text")]
#[case("multi\nline paragraph")]
#[case("punctuation, (brackets) and [unclosed")]
fn plain_paragraph_round_trips(#[case] text: &str) {
    assert_eq!(markdown_to_html(text).unwrap(), format!("<div><p>{text}</p></div>"));
}

#[rstest]
#[case("1. a\n2. b\n3. c", BlockType::OrderedList)]
#[case("3. c\n2. b\n1. a", BlockType::OrderedList)]
#[case("1. a\n3. b\n5. c", BlockType::Paragraph)]
#[case("112. a\n2. b\n3. c", BlockType::Paragraph)]
fn ordered_list_numbering(#[case] md: &str, #[case] expected: BlockType) {
    let doc = parse_document(md).unwrap();
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].block_type, expected);
}

#[test]
fn demoted_list_renders_as_paragraph() {
    let html = markdown_to_html("1. a\n3. b").unwrap();
    assert_eq!(html, "<div><p>1. a\n3. b</p></div>");
}

#[test]
fn full_document() {
    let md = r#"# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> "I am in fact a Hobbit in all but size."
>
> -- J.R.R. Tolkien

## Blog posts

- [Why Glorfindel is More Impressive than Legolas](/blog/glorfindel)
- [Why Tom Bombadil Was a Mistake](/blog/tom)

1. Gandalf
2. Bilbo
3. Sam

```
func main(){
    fmt.Println("Aiya, Ambar!")
}
```
"#;
    let expected = concat!(
        "<div>",
        "<h1>Tolkien Fan Club</h1>",
        r#"<p><img src="/images/tolkien.png" alt="JRR Tolkien sitting"></img></p>"#,
        "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
        "<blockquote>\"I am in fact a Hobbit in all but size.\"\n\n-- J.R.R. Tolkien</blockquote>",
        "<h2>Blog posts</h2>",
        "<ul>\n\t",
        r#"<li><a href="/blog/glorfindel">Why Glorfindel is More Impressive than Legolas</a></li>"#,
        "\n\t",
        r#"<li><a href="/blog/tom">Why Tom Bombadil Was a Mistake</a></li>"#,
        "</ul>",
        "<ol>\n\t<li>Gandalf</li>\n\t<li>Bilbo</li>\n\t<li>Sam</li></ol>",
        "<p><code>\nfunc main(){\n    fmt.Println(\"Aiya, Ambar!\")\n}\n</code></p>",
        "</div>",
    );
    assert_eq!(markdown_to_html(md).unwrap(), expected);
    assert_eq!(extract_title(md).unwrap(), "Tolkien Fan Club");
}

#[test]
fn emphasis_does_not_nest() {
    assert_eq!(
        tokenize("**bold _and italic_**").unwrap(),
        vec![TextSpan::new(SpanKind::Bold, "bold _and italic_")]
    );
}

#[test]
fn html_is_not_escaped() {
    let html = markdown_to_html("a <b> & c").unwrap();
    assert_eq!(html, "<div><p>a <b> & c</p></div>");
}

#[test]
fn missing_title() {
    assert_eq!(extract_title("no heading here"), Err(MarkdownError::NoTitle));
}
