use super::Locale;

/// Copy for one lead-capture form variant
#[derive(Debug, Clone)]
pub struct LeadFormStrings {
    /// Heading; also sent as the lead `source` label
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button: &'static str,
}

/// One card of the services grid
#[derive(Debug, Clone)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// One entry of the numbered benefits list
#[derive(Debug, Clone)]
pub struct BenefitItem {
    pub title: &'static str,
    pub description: &'static str,
}

/// One titled section of a policy page
#[derive(Debug, Clone)]
pub struct PolicySection {
    pub title: &'static str,
    pub text: &'static str,
    /// Bullet list rendered under the text; may be empty
    pub items: &'static [&'static str],
}

/// All localized display strings for one locale
///
/// Strings are raw text. Page rendering HTML-escapes them.
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    // ==================== Navigation ====================
    pub nav_about: &'static str,
    pub nav_services: &'static str,
    pub nav_blog: &'static str,
    pub nav_contacts: &'static str,
    pub nav_book: &'static str,
    /// Label of the "back to home" links
    pub home: &'static str,

    // ==================== Home ====================
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub about_text: &'static str,
    pub location_title: &'static str,
    pub location_hours: &'static str,
    pub consultation_title: &'static str,
    pub consultation_button: &'static str,
    pub services_title: &'static str,
    pub services: &'static [ServiceCard],
    pub benefits_label: &'static str,
    pub benefits_title: &'static str,
    pub benefits: &'static [BenefitItem],

    // ==================== Lead Forms ====================
    pub form_tour: LeadFormStrings,
    pub form_start: LeadFormStrings,
    pub form_trial: LeadFormStrings,
    pub form_name: &'static str,
    pub form_sending: &'static str,
    pub form_success: &'static str,
    pub form_error: &'static str,

    // ==================== Blog ====================
    pub blog_title: &'static str,
    pub blog_read_more: &'static str,
    pub blog_back: &'static str,
    pub blog_cta_title: &'static str,
    pub blog_cta_text: &'static str,

    // ==================== Privacy Policy ====================
    /// Title used in `<title>`
    pub privacy_meta_title: &'static str,
    pub privacy_title: &'static str,
    pub privacy_last_updated: &'static str,
    pub privacy_intro: &'static str,
    pub privacy_sections: &'static [PolicySection],
    pub contact_email: &'static str,
    pub contact_phone: &'static str,
    pub contact_address: &'static str,

    // ==================== Account Deletion ====================
    /// Title used in `<title>`
    pub delete_meta_title: &'static str,
    pub delete_title: &'static str,
    pub delete_subtitle: &'static str,
    pub delete_intro: &'static str,
    pub delete_items_title: &'static str,
    pub delete_items: &'static [&'static str],
    pub delete_how_title: &'static str,
    pub delete_how_text: &'static str,
    /// Prefilled WhatsApp message (URL-encoded when linked)
    pub delete_request_message: &'static str,
    pub delete_button: &'static str,

    // ==================== Footer ====================
    pub footer_privacy: &'static str,
    pub footer_delete_account: &'static str,
    pub footer_rights: &'static str,
}

impl LocaleStrings {
    /// Dictionary for a locale. Every supported locale has one.
    pub fn for_locale(locale: Locale) -> &'static LocaleStrings {
        match locale.code() {
            "kk" => &KAZAKH_STRINGS,
            "en" => &ENGLISH_STRINGS,
            _ => &RUSSIAN_STRINGS,
        }
    }

    /// Whether a dictionary exists for a locale code (used by validation)
    pub fn has_locale(code: &str) -> bool {
        matches!(code, "ru" | "kk" | "en")
    }

    /// Every text field paired with its name, for completeness checks
    pub fn fields(&self) -> Vec<(&'static str, &'static str)> {
        let mut fields = vec![
            ("nav_about", self.nav_about),
            ("nav_services", self.nav_services),
            ("nav_blog", self.nav_blog),
            ("nav_contacts", self.nav_contacts),
            ("nav_book", self.nav_book),
            ("home", self.home),
            ("hero_title", self.hero_title),
            ("hero_subtitle", self.hero_subtitle),
            ("about_text", self.about_text),
            ("location_title", self.location_title),
            ("location_hours", self.location_hours),
            ("consultation_title", self.consultation_title),
            ("consultation_button", self.consultation_button),
            ("services_title", self.services_title),
            ("benefits_label", self.benefits_label),
            ("benefits_title", self.benefits_title),
            ("form_name", self.form_name),
            ("form_sending", self.form_sending),
            ("form_success", self.form_success),
            ("form_error", self.form_error),
            ("blog_title", self.blog_title),
            ("blog_read_more", self.blog_read_more),
            ("blog_back", self.blog_back),
            ("blog_cta_title", self.blog_cta_title),
            ("blog_cta_text", self.blog_cta_text),
            ("privacy_meta_title", self.privacy_meta_title),
            ("privacy_title", self.privacy_title),
            ("privacy_last_updated", self.privacy_last_updated),
            ("privacy_intro", self.privacy_intro),
            ("contact_email", self.contact_email),
            ("contact_phone", self.contact_phone),
            ("contact_address", self.contact_address),
            ("delete_meta_title", self.delete_meta_title),
            ("delete_title", self.delete_title),
            ("delete_subtitle", self.delete_subtitle),
            ("delete_intro", self.delete_intro),
            ("delete_items_title", self.delete_items_title),
            ("delete_how_title", self.delete_how_title),
            ("delete_how_text", self.delete_how_text),
            ("delete_request_message", self.delete_request_message),
            ("delete_button", self.delete_button),
            ("footer_privacy", self.footer_privacy),
            ("footer_delete_account", self.footer_delete_account),
            ("footer_rights", self.footer_rights),
        ];
        for (name, form) in [
            ("form_tour", &self.form_tour),
            ("form_start", &self.form_start),
            ("form_trial", &self.form_trial),
        ] {
            fields.push((name, form.title));
            fields.push((name, form.subtitle));
            fields.push((name, form.button));
        }
        for card in self.services {
            fields.push(("services", card.title));
            fields.push(("services", card.description));
            fields.extend(card.features.iter().map(|f| ("services", *f)));
        }
        for benefit in self.benefits {
            fields.push(("benefits", benefit.title));
            fields.push(("benefits", benefit.description));
        }
        for section in self.privacy_sections {
            fields.push(("privacy_sections", section.title));
            fields.push(("privacy_sections", section.text));
        }
        fields
    }
}

// ==================== Russian Strings ====================

pub const RUSSIAN_STRINGS: LocaleStrings = LocaleStrings {
    nav_about: "О клубе",
    nav_services: "Услуги",
    nav_blog: "Блог",
    nav_contacts: "Контакты",
    nav_book: "Записаться",
    home: "Главная",

    hero_title: "Премиальный женский фитнес-клуб",
    hero_subtitle: "Персональные тренировки на оборудовании TechnoGym. Без камер, полная приватность.",
    about_text: "FORME — приватное пространство для женщин в ЖК Metropole. Индивидуальный подход, детская зона с няней и сауна.",
    location_title: "Как нас найти",
    location_hours: "Пн–Пт 07:00–22:00, Сб–Вс 09:00–20:00",
    consultation_title: "Начните свой путь к гармонии вместе с нами",
    consultation_button: "Записаться на консультацию",
    services_title: "Что мы предлагаем",
    services: &[
        ServiceCard {
            title: "Персональный тренинг",
            description: "Индивидуальная программа под ваши цели: снижение веса, набор мышечной массы, укрепление здоровья или восстановление.",
            features: &["Персональный тренер", "Индивидуальная программа", "Отслеживание прогресса"],
        },
        ServiceCard {
            title: "Премиум абонементы",
            description: "Гибкие варианты посещения с полным доступом к залу TechnoGym и всем удобствам клуба.",
            features: &["Оборудование TechnoGym", "Wellness-зона", "Свободный график"],
        },
        ServiceCard {
            title: "Детская зона",
            description: "Пока вы тренируетесь, ваш ребёнок в комфорте и безопасности под присмотром няни.",
            features: &["Профессиональная няня", "Безопасное пространство", "Развивающие игры"],
        },
    ],
    benefits_label: "Преимущества",
    benefits_title: "Почему выбирают FORME",
    benefits: &[
        BenefitItem {
            title: "Только для женщин",
            description: "Комфортная атмосфера без посторонних взглядов.",
        },
        BenefitItem {
            title: "Без камер",
            description: "Полная приватность в зале и раздевалках.",
        },
        BenefitItem {
            title: "Оборудование TechnoGym",
            description: "Премиальные тренажёры итальянского бренда.",
        },
        BenefitItem {
            title: "Детская зона с няней",
            description: "Тренируйтесь, пока о ребёнке заботится няня.",
        },
        BenefitItem {
            title: "Сауна и wellness",
            description: "Восстановление после тренировки в стенах клуба.",
        },
    ],

    form_tour: LeadFormStrings {
        title: "Экскурсия по клубу",
        subtitle: "Оставьте контакты, и мы пригласим вас посмотреть клуб",
        button: "Записаться на экскурсию",
    },
    form_start: LeadFormStrings {
        title: "Начните сегодня",
        subtitle: "Тренер свяжется с вами и подберёт программу",
        button: "Начать",
    },
    form_trial: LeadFormStrings {
        title: "Пробная тренировка",
        subtitle: "Первое занятие с персональным тренером",
        button: "Записаться на пробную",
    },
    form_name: "Ваше имя",
    form_sending: "Отправка...",
    form_success: "Спасибо! Мы свяжемся с вами в ближайшее время.",
    form_error: "Не удалось отправить заявку. Попробуйте ещё раз.",

    blog_title: "Наш блог",
    blog_read_more: "Читать",
    blog_back: "На главную",
    blog_cta_title: "Готовы начать тренироваться?",
    blog_cta_text: "Запишитесь на пробную тренировку в FORMÉ",

    privacy_meta_title: "Политика конфиденциальности",
    privacy_title: "Политика конфиденциальности",
    privacy_last_updated: "Последнее обновление: 1 ноября 2025",
    privacy_intro: "Настоящая политика описывает, какие данные собирает FORME и как мы их используем.",
    privacy_sections: &[
        PolicySection {
            title: "1. Какие данные мы собираем",
            text: "При отправке заявки на сайте мы получаем:",
            items: &["Имя", "Номер телефона", "Название формы, через которую отправлена заявка"],
        },
        PolicySection {
            title: "2. Как мы используем данные",
            text: "Данные используются только для связи с вами:",
            items: &["Запись на тренировку или экскурсию", "Ответы на ваши вопросы"],
        },
        PolicySection {
            title: "3. Хранение и передача",
            text: "Мы не храним заявки в базе данных и не передаём их третьим лицам. Заявка пересылается администратору клуба в защищённый мессенджер.",
            items: &[],
        },
        PolicySection {
            title: "4. Ваши права",
            text: "Вы можете в любой момент запросить удаление своих данных.",
            items: &[],
        },
    ],
    contact_email: "Email: Forme.gym@list.ru",
    contact_phone: "Телефон: +7 702 222 25 66",
    contact_address: "Адрес: Алматы, Аль-Фараби, 41/7, блок 7",

    delete_meta_title: "Удаление персональных данных",
    delete_title: "Удаление персональных данных",
    delete_subtitle: "Как запросить удаление ваших данных",
    delete_intro: "Вы можете попросить нас удалить все персональные данные, связанные с вами.",
    delete_items_title: "Что будет удалено",
    delete_items: &["Имя и номер телефона", "История заявок", "Переписка с администратором"],
    delete_how_title: "Как отправить запрос",
    delete_how_text: "Напишите нам в WhatsApp. Запрос обрабатывается в течение 30 дней.",
    delete_request_message: "Здравствуйте! Прошу удалить мои персональные данные.",
    delete_button: "Отправить запрос в WhatsApp",

    footer_privacy: "Политика конфиденциальности",
    footer_delete_account: "Удаление данных",
    footer_rights: "Все права защищены.",
};

// ==================== Kazakh Strings ====================

pub const KAZAKH_STRINGS: LocaleStrings = LocaleStrings {
    nav_about: "Клуб туралы",
    nav_services: "Қызметтер",
    nav_blog: "Блог",
    nav_contacts: "Байланыс",
    nav_book: "Жазылу",
    home: "Басты бет",

    hero_title: "Премиум әйелдер фитнес-клубы",
    hero_subtitle: "TechnoGym жабдығында жеке жаттығулар. Камерасыз, толық құпиялық.",
    about_text: "FORME — ЖК Metropole-дегі әйелдерге арналған жеке кеңістік. Жеке тәсіл, күтушімен балалар бөлмесі және сауна.",
    location_title: "Бізді қалай табуға болады",
    location_hours: "Дс–Жм 07:00–22:00, Сн–Жс 09:00–20:00",
    consultation_title: "Үйлесімділікке апаратын жолды бізбен бірге бастаңыз",
    consultation_button: "Кеңеске жазылу",
    services_title: "Біз не ұсынамыз",
    services: &[
        ServiceCard {
            title: "Жеке жаттығу",
            description: "Мақсатыңызға сай жеке бағдарлама: салмақ тастау, бұлшықет жинау, денсаулықты нығайту немесе қалпына келу.",
            features: &["Жеке жаттықтырушы", "Жеке бағдарлама", "Прогресті бақылау"],
        },
        ServiceCard {
            title: "Премиум абонементтер",
            description: "TechnoGym залына және клубтың барлық ыңғайлылықтарына толық қолжетімді икемді нұсқалар.",
            features: &["TechnoGym жабдығы", "Wellness аймағы", "Еркін кесте"],
        },
        ServiceCard {
            title: "Балалар бөлмесі",
            description: "Сіз жаттығып жатқанда балаңыз күтушінің қарауында жайлы әрі қауіпсіз жерде болады.",
            features: &["Кәсіби күтуші", "Қауіпсіз кеңістік", "Дамытушы ойындар"],
        },
    ],
    benefits_label: "Артықшылықтар",
    benefits_title: "Неге FORME таңдайды",
    benefits: &[
        BenefitItem {
            title: "Тек әйелдерге",
            description: "Бөгде көзқарассыз жайлы атмосфера.",
        },
        BenefitItem {
            title: "Камерасыз",
            description: "Залда және киім ауыстыру бөлмелерінде толық құпиялық.",
        },
        BenefitItem {
            title: "TechnoGym жабдығы",
            description: "Италиялық брендтің премиум тренажерлары.",
        },
        BenefitItem {
            title: "Күтушімен балалар бөлмесі",
            description: "Балаңызға күтуші қарап тұрғанда жаттығыңыз.",
        },
        BenefitItem {
            title: "Сауна және wellness",
            description: "Жаттығудан кейін клубта қалпына келу.",
        },
    ],

    form_tour: LeadFormStrings {
        title: "Клубқа экскурсия",
        subtitle: "Байланыс деректеріңізді қалдырыңыз, біз сізді клубты көруге шақырамыз",
        button: "Экскурсияға жазылу",
    },
    form_start: LeadFormStrings {
        title: "Бүгін бастаңыз",
        subtitle: "Жаттықтырушы сізбен хабарласып, бағдарлама таңдайды",
        button: "Бастау",
    },
    form_trial: LeadFormStrings {
        title: "Сынақ жаттығу",
        subtitle: "Жеке жаттықтырушымен алғашқы сабақ",
        button: "Сынақ жаттығуға жазылу",
    },
    form_name: "Атыңыз",
    form_sending: "Жіберілуде...",
    form_success: "Рахмет! Біз сізбен жақын арада хабарласамыз.",
    form_error: "Өтінімді жіберу мүмкін болмады. Қайталап көріңіз.",

    blog_title: "Біздің блог",
    blog_read_more: "Оқу",
    blog_back: "Басты бетке",
    blog_cta_title: "Жаттығуды бастауға дайынсыз ба?",
    blog_cta_text: "FORMÉ-да сынақ жаттығуға жазылыңыз",

    privacy_meta_title: "Құпиялық саясаты",
    privacy_title: "Құпиялық саясаты",
    privacy_last_updated: "Соңғы жаңарту: 2025 жылғы 1 қараша",
    privacy_intro: "Бұл саясат FORME қандай деректерді жинайтынын және оларды қалай пайдаланатынын сипаттайды.",
    privacy_sections: &[
        PolicySection {
            title: "1. Біз қандай деректерді жинаймыз",
            text: "Сайтта өтінім жібергенде біз мыналарды аламыз:",
            items: &["Аты", "Телефон нөмірі", "Өтінім жіберілген форманың атауы"],
        },
        PolicySection {
            title: "2. Деректерді қалай пайдаланамыз",
            text: "Деректер тек сізбен байланысу үшін пайдаланылады:",
            items: &["Жаттығуға немесе экскурсияға жазылу", "Сұрақтарыңызға жауап беру"],
        },
        PolicySection {
            title: "3. Сақтау және беру",
            text: "Біз өтінімдерді дерекқорда сақтамаймыз және үшінші тұлғаларға бермейміз. Өтінім клуб әкімшісіне қорғалған мессенджер арқылы жіберіледі.",
            items: &[],
        },
        PolicySection {
            title: "4. Сіздің құқықтарыңыз",
            text: "Сіз кез келген уақытта деректеріңізді жоюды сұрай аласыз.",
            items: &[],
        },
    ],
    contact_email: "Email: Forme.gym@list.ru",
    contact_phone: "Телефон: +7 702 222 25 66",
    contact_address: "Мекенжай: Алматы, Әл-Фараби, 41/7, блок 7",

    delete_meta_title: "Жеке деректерді жою",
    delete_title: "Жеке деректерді жою",
    delete_subtitle: "Деректеріңізді жоюды қалай сұрауға болады",
    delete_intro: "Сізге қатысты барлық жеке деректерді жоюды сұрай аласыз.",
    delete_items_title: "Не жойылады",
    delete_items: &["Аты және телефон нөмірі", "Өтінімдер тарихы", "Әкімшімен хат алмасу"],
    delete_how_title: "Сұранысты қалай жіберуге болады",
    delete_how_text: "Бізге WhatsApp арқылы жазыңыз. Сұраныс 30 күн ішінде өңделеді.",
    delete_request_message: "Сәлеметсіз бе! Менің жеке деректерімді жоюыңызды сұраймын.",
    delete_button: "WhatsApp арқылы сұраныс жіберу",

    footer_privacy: "Құпиялық саясаты",
    footer_delete_account: "Деректерді жою",
    footer_rights: "Барлық құқықтар қорғалған.",
};

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    nav_about: "About",
    nav_services: "Services",
    nav_blog: "Blog",
    nav_contacts: "Contacts",
    nav_book: "Book now",
    home: "Home",

    hero_title: "Premium Women's Fitness Club",
    hero_subtitle: "Personal training on TechnoGym equipment. No cameras, complete privacy.",
    about_text: "FORME is a private space for women in Metropole Residence. Individual approach, kids zone with a nanny and a sauna.",
    location_title: "How to find us",
    location_hours: "Mon–Fri 07:00–22:00, Sat–Sun 09:00–20:00",
    consultation_title: "Start your journey to harmony with us",
    consultation_button: "Book a consultation",
    services_title: "What we offer",
    services: &[
        ServiceCard {
            title: "Personal training",
            description: "An individual program for your goals: weight loss, muscle gain, better health or recovery.",
            features: &["Personal coach", "Individual program", "Progress tracking"],
        },
        ServiceCard {
            title: "Premium memberships",
            description: "Flexible visit options with full access to the TechnoGym floor and every club amenity.",
            features: &["TechnoGym equipment", "Wellness zone", "Flexible schedule"],
        },
        ServiceCard {
            title: "Kids zone",
            description: "While you train, your child stays comfortable and safe with a nanny.",
            features: &["Professional nanny", "Safe space", "Educational games"],
        },
    ],
    benefits_label: "Benefits",
    benefits_title: "Why women choose FORME",
    benefits: &[
        BenefitItem {
            title: "Women only",
            description: "A comfortable atmosphere with no outside eyes.",
        },
        BenefitItem {
            title: "No cameras",
            description: "Complete privacy on the floor and in the locker rooms.",
        },
        BenefitItem {
            title: "TechnoGym equipment",
            description: "Premium machines from the Italian brand.",
        },
        BenefitItem {
            title: "Kids zone with a nanny",
            description: "Train while a nanny looks after your child.",
        },
        BenefitItem {
            title: "Sauna and wellness",
            description: "Recover after training without leaving the club.",
        },
    ],

    form_tour: LeadFormStrings {
        title: "Club tour",
        subtitle: "Leave your contacts and we will invite you to see the club",
        button: "Book a tour",
    },
    form_start: LeadFormStrings {
        title: "Start today",
        subtitle: "A coach will contact you and pick a program",
        button: "Start",
    },
    form_trial: LeadFormStrings {
        title: "Trial training",
        subtitle: "Your first session with a personal coach",
        button: "Book a trial",
    },
    form_name: "Your name",
    form_sending: "Sending...",
    form_success: "Thank you! We will contact you shortly.",
    form_error: "Could not send your request. Please try again.",

    blog_title: "Our blog",
    blog_read_more: "Read",
    blog_back: "Back to Home",
    blog_cta_title: "Ready to start training?",
    blog_cta_text: "Book a trial training at FORMÉ",

    privacy_meta_title: "Privacy Policy",
    privacy_title: "Privacy Policy",
    privacy_last_updated: "Last updated: November 1, 2025",
    privacy_intro: "This policy describes what data FORME collects and how we use it.",
    privacy_sections: &[
        PolicySection {
            title: "1. Data we collect",
            text: "When you submit a request on the site we receive:",
            items: &["Name", "Phone number", "The name of the form used"],
        },
        PolicySection {
            title: "2. How we use data",
            text: "Data is used only to contact you:",
            items: &["Booking a training session or a tour", "Answering your questions"],
        },
        PolicySection {
            title: "3. Storage and sharing",
            text: "We do not store requests in a database and do not share them with third parties. Requests are forwarded to the club administrator over a secure messenger.",
            items: &[],
        },
        PolicySection {
            title: "4. Your rights",
            text: "You can request deletion of your data at any time.",
            items: &[],
        },
    ],
    contact_email: "Email: Forme.gym@list.ru",
    contact_phone: "Phone: +7 702 222 25 66",
    contact_address: "Address: Almaty, Al-Farabi, 41/7, block 7",

    delete_meta_title: "Personal Data Deletion",
    delete_title: "Personal Data Deletion",
    delete_subtitle: "How to request deletion of your data",
    delete_intro: "You can ask us to delete all personal data associated with you.",
    delete_items_title: "What will be deleted",
    delete_items: &["Name and phone number", "Request history", "Correspondence with the administrator"],
    delete_how_title: "How to send a request",
    delete_how_text: "Message us on WhatsApp. Requests are processed within 30 days.",
    delete_request_message: "Hello! Please delete my personal data.",
    delete_button: "Send request via WhatsApp",

    footer_privacy: "Privacy Policy",
    footer_delete_account: "Data deletion",
    footer_rights: "All rights reserved.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_locale_returns_matching_dictionary() {
        assert_eq!(LocaleStrings::for_locale(Locale::RUSSIAN).home, "Главная");
        assert_eq!(LocaleStrings::for_locale(Locale::KAZAKH).home, "Басты бет");
        assert_eq!(LocaleStrings::for_locale(Locale::ENGLISH).home, "Home");
    }

    #[test]
    fn test_every_supported_locale_has_dictionary() {
        for locale in Locale::all() {
            assert!(LocaleStrings::has_locale(locale.code()), "{}", locale);
        }
        assert!(!LocaleStrings::has_locale("de"));
    }

    #[test]
    fn test_no_empty_fields() {
        for locale in Locale::all() {
            for (name, value) in LocaleStrings::for_locale(locale).fields() {
                assert!(!value.trim().is_empty(), "{}: {} is empty", locale, name);
            }
        }
    }

    #[test]
    fn test_privacy_sections_align_across_locales() {
        let counts: Vec<_> = Locale::all()
            .into_iter()
            .map(|l| LocaleStrings::for_locale(l).privacy_sections.len())
            .collect();
        assert!(counts.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_form_variants_differ() {
        let strings = &RUSSIAN_STRINGS;
        assert_ne!(strings.form_tour.title, strings.form_start.title);
        assert_ne!(strings.form_start.title, strings.form_trial.title);
    }

    #[test]
    fn test_services_and_benefits_align_across_locales() {
        for locale in Locale::all() {
            let dict = LocaleStrings::for_locale(locale);
            assert_eq!(dict.services.len(), RUSSIAN_STRINGS.services.len(), "{}", locale);
            assert_eq!(dict.benefits.len(), RUSSIAN_STRINGS.benefits.len(), "{}", locale);
            assert!(dict.services.iter().all(|card| !card.features.is_empty()));
        }
    }
}
