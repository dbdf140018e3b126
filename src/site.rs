//! The marketing page itself.
//!
//! One server-rendered HTML document with inline CSS, no client framework.
//! Static sections live in consts; the contact form and footer are rebuilt
//! per request because they carry submission state, field values, the
//! current year, and the selected language.

use chrono::Datelike;

use crate::contact::{Inquiry, SubmissionState};
use crate::i18n::{Language, LanguageRegistry};

/// Render the full page.
///
/// `state` decides which form note (if any) is shown and whether the submit
/// button is live; `inquiry` supplies the field values to refill after a
/// failed submission. Pass `Inquiry::default()` for a blank form.
pub fn render_home(lang: Language, state: SubmissionState, inquiry: &Inquiry) -> String {
    let mut html = String::with_capacity(32768);

    html.push_str("<!DOCTYPE html>\n<html lang=\"");
    html.push_str(lang.code());
    html.push_str("\">\n<head>\n");
    html.push_str(HEAD_META);
    html.push_str(PAGE_CSS);
    html.push_str("</head>\n<body>\n<div class=\"site\">\n");
    html.push_str(NAV);
    html.push_str("<main>\n");
    html.push_str(HERO);
    html.push_str(MARQUEE);
    html.push_str(SERVICES);
    html.push_str(CASE_STUDIES);
    html.push_str(APPROACH);
    html.push_str(&contact_section(state, inquiry));
    html.push_str("</main>\n");
    html.push_str(&footer(lang));
    html.push_str("</div>\n</body>\n</html>\n");

    html
}

/// Escape text for interpolation into HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

fn contact_section(state: SubmissionState, inquiry: &Inquiry) -> String {
    let button = if state.submit_disabled() {
        r#"<button type="submit" class="btn btn-primary" disabled>Sending…</button>"#
    } else {
        r#"<button type="submit" class="btn btn-primary">Send inquiry</button>"#
    };

    let note = match state.note() {
        Some(text) => {
            let class = if state == SubmissionState::Error {
                "error"
            } else {
                "success"
            };
            format!("\n<div class=\"form-note {class}\">{text}</div>")
        }
        None => String::new(),
    };

    format!(
        r##"<section class="cta" id="contact">
<h2>Start a conversation</h2>
<p>Tell us your goals. We’ll propose a clear, high-ROI path.</p>
<form class="contact-form" method="post" action="/contact">
<div class="grid">
<input name="name" type="text" placeholder="Your name" required value="{name}">
<input name="email" type="email" placeholder="Work email" required value="{email}">
</div>
<input name="company" type="text" placeholder="Company (optional)" value="{company}">
<textarea name="message" rows="5" placeholder="What are you looking to build or automate?" required>{message}</textarea>
{button}{note}
</form>
<div class="small-note">
Prefer LinkedIn? <a href="https://www.linkedin.com/company/trochlear/about/?viewAsMember=true" target="_blank" rel="noopener noreferrer" class="link-accent">Connect here</a>.
</div>
</section>
"##,
        name = escape_html(&inquiry.name),
        email = escape_html(&inquiry.email),
        company = escape_html(&inquiry.company),
        message = escape_html(&inquiry.message),
        button = button,
        note = note,
    )
}

fn footer(lang: Language) -> String {
    let year = chrono::Utc::now().year();

    let mut options = String::new();
    for config in LanguageRegistry::get().list_enabled() {
        let selected = if config.code == lang.code() { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            config.code, selected, config.native_name
        ));
    }

    format!(
        r##"<footer class="footer">
<div>© {year} Trochlear</div>
<div class="footer-links">
<a href="#work">Work</a>
<a href="#services">Services</a>
<a href="#approach">Approach</a>
<a href="#contact">Contact</a>
</div>
<form class="footer-lang" method="post" action="/language">
<label for="lang" class="sr-only">Language</label>
<select id="lang" name="lang" class="lang-select" onchange="this.form.submit()">
{options}</select>
<noscript><button type="submit" class="btn btn-outline">Set</button></noscript>
</form>
</footer>
"##
    )
}

const HEAD_META: &str = r#"<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="We design, engineer, and ship AI-powered products and automations that drive measurable ROI for global brands.">
<title>Trochlear — AI Software Development</title>
"#;

const NAV: &str = r##"<header class="nav">
<div class="nav-brand">Trochlear</div>
<nav class="nav-links">
<a href="#work">Work</a>
<a href="#services">Services</a>
<a href="#approach">Approach</a>
<a href="#contact" class="btn btn-outline">Contact</a>
</nav>
</header>
"##;

const HERO: &str = r##"<section class="hero" id="home">
<div class="hero-content">
<h1>AI Software Development, Crafted for Luxury-Grade Outcomes..</h1>
<p class="subtitle">We design, engineer, and ship AI-powered products and automations that drive measurable ROI for global brands.</p>
<div class="cta-row">
<a class="btn btn-primary" href="https://www.linkedin.com/company/trochlear/about/?viewAsMember=true" target="_blank" rel="noopener noreferrer">Connect on LinkedIn</a>
<a class="btn btn-ghost" href="#services">Explore Services</a>
</div>
</div>
</section>
"##;

const MARQUEE: &str = r##"<section class="marquee" aria-hidden="true">
<div class="marquee-track">
<span>Strategy</span>
<span>Vision</span>
<span>Design</span>
<span>Engineering</span>
<span>Automation</span>
<span>Analytics</span>
<span>Strategy</span>
<span>Vision</span>
<span>Design</span>
<span>Engineering</span>
<span>Automation</span>
<span>Analytics</span>
</div>
</section>
"##;

const SERVICES: &str = r##"<section class="section" id="services">
<h2>Services</h2>
<div class="cards">
<div class="card">
<h3>AI Product Development</h3>
<p>Custom AI apps, copilots, and agents—from concept to launch.</p>
</div>
<div class="card">
<h3>Automation &amp; Ops</h3>
<p>Streamline workflows with robust, observable automations.</p>
</div>
<div class="card">
<h3>Data &amp; Integrations</h3>
<p>ETL, vector search, and secure integrations across your stack.</p>
</div>
</div>
</section>
"##;

const CASE_STUDIES: &str = r##"<section class="section" id="work">
<h2>Case Studies</h2>
<div class="studies">
<article class="study">
<div class="study-head">
<h3>Luxury Retail — AI Styling Copilot</h3>
<span class="badge">+18% AOV</span>
</div>
<p>Conversational product assistant that personalizes looks and bundles across catalog and inventory signals.</p>
</article>
<article class="study">
<div class="study-head">
<h3>Global Logistics — Ops Automation</h3>
<span class="badge">-42% TTR</span>
</div>
<p>Automated exception handling with human-in-the-loop review, observability, and audit trails.</p>
</article>
<article class="study">
<div class="study-head">
<h3>Financial Services — Risk Copilot</h3>
<span class="badge">99.9% SLA</span>
</div>
<p>Document intelligence and decision support integrated with internal policy and third-party data.</p>
</article>
</div>
</section>
"##;

const APPROACH: &str = r##"<section class="section" id="approach">
<h2>Approach</h2>
<ul class="steps">
<li>
<span class="step-index">01</span>
<div>
<h4>Diagnostic</h4>
<p>Define ROI targets, constraints, and success metrics.</p>
</div>
</li>
<li>
<span class="step-index">02</span>
<div>
<h4>Design</h4>
<p>Experience, systems, and data design for clarity and speed.</p>
</div>
</li>
<li>
<span class="step-index">03</span>
<div>
<h4>Delivery</h4>
<p>Ship iteratively with tight quality and observability.</p>
</div>
</li>
</ul>
</section>
"##;

const PAGE_CSS: &str = r##"<style>
:root{--bg:#0a0a0f;--surface:#12121a;--card:#16161f;--border:#26263a;--text:#e8e6e3;--muted:#9b97a6;--accent:#c9a96e;--accent-strong:#e0c58f;--error:#e5484d;--success:#46a758}
*{margin:0;padding:0;box-sizing:border-box}
html{scroll-behavior:smooth}
body{background:var(--bg);color:var(--text);font-family:'Inter',-apple-system,'Segoe UI',sans-serif;line-height:1.6;-webkit-font-smoothing:antialiased}
.site{display:flex;flex-direction:column;min-height:100vh}
.nav{display:flex;justify-content:space-between;align-items:center;padding:1.5rem 6vw;position:sticky;top:0;background:rgba(10,10,15,.85);backdrop-filter:blur(12px);border-bottom:1px solid var(--border);z-index:10}
.nav-brand{font-size:1.25rem;font-weight:700;letter-spacing:.12em;text-transform:uppercase;color:var(--accent)}
.nav-links{display:flex;gap:2rem;align-items:center}
.nav-links a{color:var(--muted);text-decoration:none;font-size:.95rem;transition:color .2s}
.nav-links a:hover{color:var(--text)}
.btn{display:inline-block;padding:.7rem 1.6rem;border-radius:999px;font-size:.95rem;text-decoration:none;border:1px solid transparent;cursor:pointer;transition:all .2s}
.btn-outline{border-color:var(--accent);color:var(--accent)}
.btn-outline:hover{background:var(--accent);color:var(--bg)}
.btn-primary{background:var(--accent);color:var(--bg);font-weight:600;border:none}
.btn-primary:hover{background:var(--accent-strong)}
.btn-primary:disabled{opacity:.6;cursor:wait}
.btn-ghost{color:var(--text);border-color:var(--border)}
.btn-ghost:hover{border-color:var(--accent);color:var(--accent)}
.hero{padding:10rem 6vw 6rem;max-width:60rem}
.hero h1{font-size:clamp(2.2rem,5vw,3.8rem);line-height:1.15;font-weight:700;letter-spacing:-.02em}
.subtitle{margin-top:1.5rem;font-size:1.15rem;color:var(--muted);max-width:38rem}
.cta-row{margin-top:2.5rem;display:flex;gap:1rem;flex-wrap:wrap}
.marquee{overflow:hidden;border-top:1px solid var(--border);border-bottom:1px solid var(--border);padding:1.1rem 0;white-space:nowrap}
.marquee-track{display:inline-flex;gap:3rem;animation:scroll 28s linear infinite}
.marquee-track span{color:var(--muted);font-size:.9rem;letter-spacing:.25em;text-transform:uppercase}
@keyframes scroll{from{transform:translateX(0)}to{transform:translateX(-50%)}}
.section{padding:5rem 6vw}
.section h2{font-size:2rem;margin-bottom:2.5rem;letter-spacing:-.01em}
.cards{display:grid;grid-template-columns:repeat(auto-fit,minmax(16rem,1fr));gap:1.5rem}
.card{background:var(--card);border:1px solid var(--border);border-radius:14px;padding:2rem}
.card h3{font-size:1.15rem;margin-bottom:.75rem;color:var(--accent)}
.card p{color:var(--muted);font-size:.95rem}
.studies{display:grid;gap:1.5rem}
.study{background:var(--card);border:1px solid var(--border);border-radius:14px;padding:2rem}
.study-head{display:flex;justify-content:space-between;align-items:baseline;gap:1rem;flex-wrap:wrap;margin-bottom:.75rem}
.study-head h3{font-size:1.1rem}
.badge{background:rgba(201,169,110,.12);color:var(--accent);border:1px solid var(--accent);border-radius:999px;padding:.2rem .9rem;font-size:.8rem;white-space:nowrap}
.study p{color:var(--muted);font-size:.95rem;max-width:44rem}
.steps{list-style:none;display:grid;gap:1.5rem}
.steps li{display:flex;gap:1.5rem;align-items:flex-start;background:var(--card);border:1px solid var(--border);border-radius:14px;padding:1.75rem 2rem}
.step-index{font-size:1.5rem;color:var(--accent);font-weight:700}
.steps h4{font-size:1.05rem;margin-bottom:.3rem}
.steps p{color:var(--muted);font-size:.95rem}
.cta{padding:5rem 6vw;background:var(--surface);border-top:1px solid var(--border)}
.cta h2{font-size:2rem}
.cta>p{color:var(--muted);margin-top:.75rem}
.contact-form{margin-top:2.5rem;max-width:40rem;display:flex;flex-direction:column;gap:1rem}
.grid{display:grid;grid-template-columns:1fr 1fr;gap:1rem}
.contact-form input,.contact-form textarea{background:var(--bg);border:1px solid var(--border);border-radius:10px;padding:.9rem 1.1rem;color:var(--text);font:inherit;width:100%}
.contact-form input:focus,.contact-form textarea:focus{outline:none;border-color:var(--accent)}
.contact-form button{align-self:flex-start}
.form-note{border-radius:10px;padding:.8rem 1.1rem;font-size:.95rem}
.form-note.success{background:rgba(70,167,88,.12);color:var(--success);border:1px solid var(--success)}
.form-note.error{background:rgba(229,72,77,.12);color:var(--error);border:1px solid var(--error)}
.small-note{margin-top:1.5rem;color:var(--muted);font-size:.9rem}
.link-accent{color:var(--accent)}
.footer{margin-top:auto;display:flex;justify-content:space-between;align-items:center;gap:1.5rem;flex-wrap:wrap;padding:2rem 6vw;border-top:1px solid var(--border);color:var(--muted);font-size:.9rem}
.footer-links{display:flex;gap:1.5rem}
.footer-links a{color:var(--muted);text-decoration:none}
.footer-links a:hover{color:var(--text)}
.lang-select{background:var(--card);color:var(--text);border:1px solid var(--border);border-radius:8px;padding:.45rem .8rem;font:inherit}
.sr-only{position:absolute;width:1px;height:1px;padding:0;margin:-1px;overflow:hidden;clip:rect(0,0,0,0);border:0}
@media(max-width:40rem){.grid{grid-template-columns:1fr}.nav-links{gap:1rem}.hero{padding:6rem 6vw 4rem}}
</style>
"##;
