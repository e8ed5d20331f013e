//! System prompt for the resume assistant.
//!
//! `render_system_prompt` is pure: same profile in, same prompt out. It is
//! rendered once at startup and shared through `AppState`.

use std::fmt::Write;

use crate::models::profile::{Experience, ResumeProfile};

/// Behavioral rules the assistant must follow, independent of profile content.
pub const ASSISTANT_RULES: &str = "## Kurallar:
1. SADECE aşağıdaki özgeçmiş bilgilerine dayanarak cevap ver
2. Bilmediğin veya özgeçmişte olmayan konular hakkında tahmin yapma
3. Türkçe yanıt ver (kullanıcı İngilizce sorarsa İngilizce yanıt verebilirsin)
4. Samimi, profesyonel ve yardımsever ol
5. Yanıtları kısa ve öz tut (2-3 paragrafı geçme)
6. Teknik detayları sorulduğunda açıkla
7. İletişim bilgileri sorulduğunda paylaş";

/// Builds the full system prompt from the resume profile.
pub fn render_system_prompt(profile: &ResumeProfile) -> String {
    let personal = &profile.personal;
    let skills = &profile.skills;

    let experience = profile
        .experience
        .iter()
        .map(render_experience)
        .collect::<Vec<_>>()
        .join("\n");

    let education = profile
        .education
        .iter()
        .map(|edu| format!("- {}: {} ({})", edu.institution, edu.degree, edu.year))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Sen {name} için hazırlanmış interaktif özgeçmiş asistanısın. Ziyaretçilerin {name} hakkında sorduğu sorulara cevap veriyorsun.

{rules}

## Özgeçmiş Bilgileri:

### Kişisel Bilgiler:
- İsim: {name}
- Ünvan: {title}
- Lokasyon: {location}
- Email: {email}
- Telefon: {phone}
- LinkedIn: {linkedin}
- GitHub: {github}

### Özet:
{summary}

### Teknik Seviye:
{technical_level}

### Yetenekler:
- Frontend: {frontend}
- Backend: {backend}
- Database: {database}
- Tools: {tools}
- Diğer: {other}

### İş Deneyimi:
{experience}

### Eğitim:
{education}

### Güçlü Yönler:
{strengths}

### Proje Türleri:
{project_types}

### Diller:
- Türkçe: {turkish}
- İngilizce: {english}
",
        name = personal.name,
        rules = ASSISTANT_RULES,
        title = personal.title,
        location = personal.location,
        email = personal.email,
        phone = personal.phone,
        linkedin = personal.linkedin,
        github = personal.github,
        summary = profile.summary,
        technical_level = profile.technical_level,
        frontend = skills.frontend.join(", "),
        backend = skills.backend.join(", "),
        database = skills.database.join(", "),
        tools = skills.tools.join(", "),
        other = skills.other.join(", "),
        experience = experience,
        education = education,
        strengths = bullet_list(&profile.strengths),
        project_types = bullet_list(&profile.project_types),
        turkish = profile.languages.turkish,
        english = profile.languages.english,
    )
}

fn render_experience(exp: &Experience) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "**{}** - {} ({}, {})",
        exp.company, exp.position, exp.period, exp.duration
    );
    let _ = writeln!(out, "{}", exp.description);
    for project in exp.projects.iter().flatten() {
        let _ = writeln!(out, "- {}: {}", project.name, project.description);
    }
    let _ = writeln!(out, "Teknolojiler: {}", exp.technologies.join(", "));
    out
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
