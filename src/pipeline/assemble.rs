//! Document assembler: wrap the rendered fragment in the fixed style shell.
//!
//! Two template variants exist, one per output sink:
//!
//! * **PDF** — no `@page` rule; page size and margins come from the
//!   wkhtmltopdf options instead, so the style sheet setting them too would
//!   double-apply.
//! * **HTML** — `lang="ja"`, an `@page` rule and `@media print` font sizes
//!   so the browser's print-to-PDF path produces comparable pages, plus a
//!   `.page-break` helper class.
//!
//! Both share the Japanese-first font stack, the gradient H1 banner, heading
//! underlines, code/pre/table styling, framed images and the `.highlight`
//! callout class. The fragment is inserted verbatim — the renderer output is
//! trusted, no sanitisation.

use crate::config::OutputFormat;
use std::fmt::Write;

/// Style sheet handed to wkhtmltopdf.
const PDF_STYLE: &str = r#"
body {
    font-family: 'Hiragino Sans', 'Yu Gothic', 'Meiryo', sans-serif;
    line-height: 1.6;
    max-width: 800px;
    margin: 0 auto;
    padding: 20px;
    color: #333;
}
h1, h2, h3 {
    color: #2c3e50;
    border-bottom: 2px solid #3498db;
    padding-bottom: 10px;
}
h1 {
    font-size: 28px;
    text-align: center;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    padding: 20px;
    margin: 0 0 30px 0;
    border-radius: 10px;
}
h2 {
    font-size: 22px;
    margin-top: 30px;
}
h3 {
    font-size: 18px;
    margin-top: 25px;
}
code {
    background-color: #f4f4f4;
    padding: 2px 4px;
    border-radius: 3px;
    font-family: 'Courier New', monospace;
}
pre {
    background-color: #f8f9fa;
    padding: 15px;
    border-radius: 5px;
    overflow-x: auto;
    border-left: 4px solid #3498db;
}
table {
    border-collapse: collapse;
    width: 100%;
    margin: 20px 0;
}
th, td {
    border: 1px solid #ddd;
    padding: 12px;
    text-align: left;
}
th {
    background-color: #f2f2f2;
    font-weight: bold;
}
img {
    max-width: 100%;
    height: auto;
    border: 1px solid #ddd;
    border-radius: 5px;
    margin: 10px 0;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
}
.highlight {
    background-color: #fff3cd;
    padding: 15px;
    border-radius: 5px;
    border-left: 4px solid #ffc107;
    margin: 20px 0;
}
ul, ol {
    padding-left: 20px;
}
li {
    margin: 5px 0;
}
"#;

/// Style sheet for the browser variant: the PDF styles plus print hints.
const HTML_STYLE: &str = r#"
@page {
    size: A4;
    margin: 2cm;
}
body {
    font-family: 'Hiragino Sans', 'Yu Gothic', 'Meiryo', 'MS Gothic', sans-serif;
    line-height: 1.6;
    max-width: 800px;
    margin: 0 auto;
    padding: 20px;
    color: #333;
    background: white;
}
h1, h2, h3 {
    color: #2c3e50;
    border-bottom: 2px solid #3498db;
    padding-bottom: 10px;
}
h1 {
    font-size: 28px;
    text-align: center;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    padding: 20px;
    margin: 0 0 30px 0;
    border-radius: 10px;
}
h2 {
    font-size: 22px;
    margin-top: 30px;
    page-break-before: auto;
}
h3 {
    font-size: 18px;
    margin-top: 25px;
}
code {
    background-color: #f4f4f4;
    padding: 2px 4px;
    border-radius: 3px;
    font-family: 'Courier New', 'Monaco', monospace;
    font-size: 0.9em;
}
pre {
    background-color: #f8f9fa;
    padding: 15px;
    border-radius: 5px;
    overflow-x: auto;
    border-left: 4px solid #3498db;
    font-family: 'Courier New', 'Monaco', monospace;
    font-size: 0.9em;
}
table {
    border-collapse: collapse;
    width: 100%;
    margin: 20px 0;
    font-size: 0.9em;
}
th, td {
    border: 1px solid #ddd;
    padding: 12px;
    text-align: left;
}
th {
    background-color: #f2f2f2;
    font-weight: bold;
}
img {
    max-width: 100%;
    height: auto;
    border: 1px solid #ddd;
    border-radius: 5px;
    margin: 10px 0;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    page-break-inside: avoid;
}
.highlight {
    background-color: #fff3cd;
    padding: 15px;
    border-radius: 5px;
    border-left: 4px solid #ffc107;
    margin: 20px 0;
}
ul, ol {
    padding-left: 20px;
}
li {
    margin: 5px 0;
}
.page-break {
    page-break-before: always;
}
@media print {
    body {
        font-size: 12pt;
    }
    h1 {
        font-size: 24pt;
    }
    h2 {
        font-size: 18pt;
    }
    h3 {
        font-size: 14pt;
    }
}
"#;

/// Wrap the rendered fragment in the full document shell.
pub fn assemble(fragment: &str, title: &str, format: OutputFormat) -> String {
    let (style, lang_attr) = match format {
        OutputFormat::Pdf => (PDF_STYLE, ""),
        OutputFormat::Html => (HTML_STYLE, r#" lang="ja""#),
    };

    let mut doc = String::with_capacity(style.len() + fragment.len() + 256);
    write!(
        doc,
        "<!DOCTYPE html>\n\
         <html{lang_attr}>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>{style}</style>\n\
         </head>\n\
         <body>\n\
         {fragment}\n\
         </body>\n\
         </html>\n"
    )
    .expect("writing to a String cannot fail");
    doc
}
