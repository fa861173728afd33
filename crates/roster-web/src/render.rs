//! HTML rendering of the chat page.
//!
//! Every piece of text that originates outside this file (the echoed
//! question, cell values, scalar values) goes through [`escape`].

use quick_xml::escape::escape;
use roster_core::{Answer, answer::Table};

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Roster</title>
<style>
  body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }
  table { border-collapse: collapse; }
  th, td { border: 1px solid #ccc; padding: 0.25rem 0.75rem; text-align: left; }
</style>
</head>
<body>
<h1>Roster</h1>
"#;

const TAIL: &str = "</body>\n</html>\n";

/// The whole page: the question form, pre-filled with `question`, followed
/// by `answer` if there is one.
pub fn page(question: Option<&str>, answer: Option<&Answer>) -> String {
  let mut html = String::from(HEAD);

  html.push_str(&format!(
    "<form method=\"post\" action=\"/\">\n\
     <input type=\"text\" name=\"user_query\" size=\"60\" value=\"{}\" \
     placeholder=\"Who is the manager of the Sales department?\" autofocus>\n\
     <button type=\"submit\">Ask</button>\n\
     </form>\n",
    escape(question.unwrap_or_default())
  ));

  if let Some(answer) = answer {
    html.push_str("<div class=\"response\">\n");
    html.push_str(&answer_html(answer));
    html.push_str("</div>\n");
  }

  html.push_str(TAIL);
  html
}

/// Render one answer as an HTML fragment.
pub fn answer_html(answer: &Answer) -> String {
  match answer {
    Answer::Table(table) => table_html(table),
    Answer::Scalar { label, value } => {
      format!("<p>{}: {}</p>\n", escape(label.as_str()), escape(value.as_str()))
    }
    marker => format!("<p>{}</p>\n", escape(marker.message().unwrap_or_default())),
  }
}

fn table_html(table: &Table) -> String {
  let mut html = String::from("<table>\n<tr>");
  for column in &table.columns {
    html.push_str(&format!("<th>{}</th>", escape(column.as_str())));
  }
  html.push_str("</tr>\n");

  for row in &table.rows {
    html.push_str("<tr>");
    for cell in row {
      html.push_str(&format!("<td>{}</td>", escape(cell.as_str())));
    }
    html.push_str("</tr>\n");
  }

  html.push_str("</table>\n");
  html
}
