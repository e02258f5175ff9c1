//! Embedded web UI: a JSON editor and a generation page.
//!
//! Two static pages talking to the JSON API with `fetch`; no build step, no
//! assets on disk.

use axum::response::{Html, Redirect};

/// GET /, redirects to the editor.
pub async fn index_handler() -> Redirect {
    Redirect::to("/edit")
}

/// GET /edit
pub async fn edit_handler() -> Html<&'static str> {
    Html(EDIT_PAGE)
}

/// GET /generate
pub async fn generate_handler() -> Html<&'static str> {
    Html(GENERATE_PAGE)
}

const EDIT_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Resume editor</title>
<style>
  body { font-family: sans-serif; margin: 2rem; max-width: 60rem; }
  textarea { width: 100%; height: 28rem; font-family: monospace; }
  select, button, input { font-size: 1rem; margin-right: .5rem; }
  #status { margin-left: 1rem; }
  nav a { margin-right: 1rem; }
</style>
</head>
<body>
<nav><a href="/edit">Edit</a><a href="/generate">Generate</a></nav>
<h1>Resume editor</h1>
<p>
  <select id="language"></select>
  <button onclick="load()">Load</button>
  <button onclick="save()">Save</button>
  <input id="newlang" placeholder="new code (ex: fr)" size="14">
  <button onclick="create()">Create language</button>
  <span id="status"></span>
</p>
<textarea id="doc" spellcheck="false"></textarea>
<script>
const status = (msg) => document.getElementById('status').textContent = msg;

async function languages() {
  const res = await fetch('/api/v1/languages');
  const langs = await res.json();
  const sel = document.getElementById('language');
  sel.innerHTML = '';
  for (const l of langs) {
    const opt = document.createElement('option');
    opt.value = l.code;
    opt.textContent = `${l.name} (${l.code})`;
    sel.appendChild(opt);
  }
}

async function load() {
  const lang = document.getElementById('language').value;
  const res = await fetch(`/api/v1/resumes/${lang}`);
  if (!res.ok) { status('load failed'); return; }
  document.getElementById('doc').value = JSON.stringify(await res.json(), null, 2);
  status('loaded');
}

async function save() {
  const lang = document.getElementById('language').value;
  let body;
  try { body = JSON.parse(document.getElementById('doc').value); }
  catch (e) { status('invalid JSON: ' + e.message); return; }
  const res = await fetch(`/api/v1/resumes/${lang}`, {
    method: 'PUT',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify(body),
  });
  status(res.ok ? 'saved' : 'save failed');
}

async function create() {
  const language = document.getElementById('newlang').value.trim();
  if (!language) { status('enter a language code'); return; }
  const res = await fetch('/api/v1/resumes', {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify({language}),
  });
  if (res.ok) { await languages(); status('created'); }
  else { status((await res.json()).error.message); }
}

languages().then(load);
</script>
</body>
</html>
"#;

const GENERATE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Generate resume</title>
<style>
  body { font-family: sans-serif; margin: 2rem; max-width: 40rem; }
  select, button { font-size: 1rem; margin-right: .5rem; }
  #result { margin-top: 1rem; }
  nav a { margin-right: 1rem; }
</style>
</head>
<body>
<nav><a href="/edit">Edit</a><a href="/generate">Generate</a></nav>
<h1>Generate resume</h1>
<p>
  <select id="language"></select>
  <select id="template"></select>
  <button onclick="generate()">Generate</button>
</p>
<div id="result"></div>
<script>
async function fill() {
  const [langs, templates] = await Promise.all([
    fetch('/api/v1/languages').then(r => r.json()),
    fetch('/api/v1/templates').then(r => r.json()),
  ]);
  const langSel = document.getElementById('language');
  for (const l of langs) {
    const opt = document.createElement('option');
    opt.value = l.code;
    opt.textContent = `${l.name} (${l.code})`;
    langSel.appendChild(opt);
  }
  const tplSel = document.getElementById('template');
  for (const t of templates) {
    const opt = document.createElement('option');
    opt.value = t.name;
    opt.textContent = `${t.name} (${t.format.toUpperCase()}${t.ats ? ', ATS' : ''})`;
    tplSel.appendChild(opt);
  }
}

async function generate() {
  const result = document.getElementById('result');
  result.textContent = 'generating...';
  const res = await fetch('/api/v1/generate', {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify({
      language: document.getElementById('language').value,
      template: document.getElementById('template').value,
    }),
  });
  const body = await res.json();
  if (!res.ok) { result.textContent = body.error.message; return; }
  result.innerHTML = '';
  const link = document.createElement('a');
  link.href = body.download_url;
  link.textContent = `Download ${body.filename}`;
  result.appendChild(link);
}

fill();
</script>
</body>
</html>
"#;
