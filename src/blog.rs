//! Static blog posts and their line-based content markup.

use crate::html::escape_html;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Site-relative image path
    pub image: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub content: &'static str,
}

static POSTS: [BlogPost; 3] = [
    BlogPost {
        slug: "fitness-i-materinstvo",
        title: "Как совмещать фитнес и материнство: опыт наших клиенток",
        excerpt: "Многие мамы сталкиваются с вопросом: как найти время на себя, когда дома маленький ребёнок? Наши клиентки делятся своим опытом.",
        image: "/images/blog-materinstvo.jpg",
        date: "10 ноября, 2025",
        category: "Fitness",
        content: "Найти час на себя с маленьким ребёнком непросто. Наши клиентки нашли решение.

## Детская зона с няней

Пока вы тренируетесь, ребёнок играет под присмотром няни в соседней комнате.

## Короткие, но регулярные тренировки

- 45 минут три раза в неделю
- Утренние слоты с 07:00
- Программа, учитывающая восстановление после родов

## Что говорят мамы

Главное — регулярность, а не длительность. Даже две тренировки в неделю дают результат.",
    },
    BlogPost {
        slug: "silovye-trenirovki-dlya-zhenshhin",
        title: "Почему женщинам важно тренировать силу, а не только кардио",
        excerpt: "Силовые тренировки — это не про «накачаться». Это про здоровье костей, ускорение метаболизма и красивый рельеф тела.",
        image: "/images/blog-kardio.webp",
        date: "10 ноября, 2025",
        category: "Fitness",
        content: "Силовые тренировки — основа здоровья, а не только спортивной формы.

## Польза силовых тренировок

1. Крепкие кости и суставы
2. Ускорение метаболизма
3. Красивая осанка
4. Уверенность в себе

### А как же кардио?

Кардио остаётся частью программы, но без силовой нагрузки мышцы теряют тонус.

#### Совет тренера

Начинайте с небольших весов под контролем персонального тренера.",
    },
    BlogPost {
        slug: "kak-nachat-trenirovatsya-posle-pereryva",
        title: "Как начать тренироваться после долгого перерыва: советы для женщин",
        excerpt: "Вернуться в спорт после паузы бывает сложно. Рассказываем, как это сделать правильно и без травм.",
        image: "/images/blog-pereryv.jpg",
        date: "10 ноября, 2025",
        category: "Fitness",
        content: "После паузы тело нужно возвращать к нагрузкам постепенно.

## Первые две недели

- Лёгкие тренировки всего тела
- Больше внимания растяжке
- Не больше трёх занятий в неделю

## Слушайте своё тело

Усталость после тренировки — нормально, боль в суставах — повод снизить нагрузку.",
    },
];

/// All posts in display order.
pub fn all_blog_posts() -> &'static [BlogPost] {
    &POSTS
}

/// Look up a post by slug.
pub fn get_blog_post(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.slug == slug)
}

/// Render post content to HTML, one block per line.
///
/// `## `/`### `/`#### ` become headings, `- ` and `N. ` become list items,
/// blank lines are dropped and everything else is a paragraph.
pub fn render_content(content: &str) -> String {
    let mut out = String::new();
    for line in content.split('\n') {
        if let Some(text) = line.strip_prefix("## ") {
            out.push_str(&format!("<h2>{}</h2>\n", escape_html(text)));
        } else if let Some(text) = line.strip_prefix("### ") {
            out.push_str(&format!("<h3>{}</h3>\n", escape_html(text)));
        } else if let Some(text) = line.strip_prefix("#### ") {
            out.push_str(&format!("<h4>{}</h4>\n", escape_html(text)));
        } else if let Some(text) = line.strip_prefix("- ") {
            out.push_str(&format!("<li>{}</li>\n", escape_html(text)));
        } else if let Some(text) = strip_numbered(line) {
            out.push_str(&format!(
                "<li class=\"list-decimal\">{}</li>\n",
                escape_html(text)
            ));
        } else if line.trim().is_empty() {
            continue;
        } else {
            out.push_str(&format!("<p>{}</p>\n", escape_html(line)));
        }
    }
    out
}

/// Strip a leading "N. " marker for single-digit N from 1 to 4.
fn strip_numbered(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('1'..='4'), Some('.'), Some(' ')) => Some(&line[3..]),
        _ => None,
    }
}
