//! Canned lesson-plan template data for the Jordanian national curriculum.
//!
//! All branch selection goes through one ordered table (`BRANCHES`): each
//! entry pairs a subject label and a keyword group with the template record
//! to use when a keyword matches the lesson title. Within a subject, the
//! first entry whose keywords match wins; an entry with an empty keyword
//! list is that subject's default and must be declared last in its group.
//! `{title}` and `{subject}` mark the interpolation points.

/// Subject labels the generator dispatches on. Labels not listed here fall
/// through to the generic default record.
pub const SUBJECT_SCIENCE: &str = "العلوم";
pub const SUBJECT_MATH: &str = "الرياضيات";
pub const SUBJECT_ARABIC: &str = "اللغة العربية";
pub const SUBJECT_ENGLISH: &str = "اللغة الإنجليزية";

/// Subjects offered by the form, in display order.
pub const SUBJECTS: &[&str] = &[
    "الرياضيات",
    "العلوم",
    "اللغة العربية",
    "اللغة الإنجليزية",
    "التربية الإسلامية",
    "الدراسات الاجتماعية",
    "التربية الفنية",
    "التربية البدنية",
    "تاريخ الأردن",
    "الكيمياء",
    "الفيزياء",
    "الأحياء",
    "التربية المهنية",
    "الثقافة المالية",
    "الحاسوب",
];

/// Grades offered by the form, in display order.
pub const GRADES: &[&str] = &[
    "الصف الأول",
    "الصف الثاني",
    "الصف الثالث",
    "الصف الرابع",
    "الصف الخامس",
    "الصف السادس",
    "الصف السابع",
    "الصف الثامن",
    "الصف التاسع",
    "الصف العاشر",
    "الصف الحادي عشر",
    "الصف الثاني عشر",
];

/// Grade labels shown on the English-language template. Unknown labels pass
/// through untranslated.
pub const GRADE_TRANSLATIONS: &[(&str, &str)] = &[
    ("الصف الأول", "Grade 1"),
    ("الصف الثاني", "Grade 2"),
    ("الصف الثالث", "Grade 3"),
    ("الصف الرابع", "Grade 4"),
    ("الصف الخامس", "Grade 5"),
    ("الصف السادس", "Grade 6"),
    ("الصف السابع", "Grade 7"),
    ("الصف الثامن", "Grade 8"),
    ("الصف التاسع", "Grade 9"),
    ("الصف العاشر", "Grade 10"),
    ("الصف الحادي عشر", "Grade 11"),
    ("الصف الثاني عشر", "Grade 12"),
];

pub fn english_grade_label(grade: &str) -> &str {
    GRADE_TRANSLATIONS
        .iter()
        .find(|(ar, _)| *ar == grade)
        .map(|(_, en)| *en)
        .unwrap_or(grade)
}

/// One timed agenda entry template.
pub struct StepTemplate {
    pub activity: &'static str,
    pub time: &'static str,
}

/// One placeholder row template for the daily follow-up table.
pub struct FollowUpTemplate {
    pub section: &'static str,
    pub class: &'static str,
    pub achieved_outcomes: &'static str,
    pub homework: &'static str,
}

/// The branch-specific part of a lesson plan.
pub struct TemplateRecord {
    pub objectives: &'static [&'static str],
    pub materials_and_resources: &'static [&'static str],
    pub procedures: &'static [StepTemplate],
    pub prior_learning: &'static str,
    pub horizontal_integration: &'static str,
    pub vertical_integration: &'static str,
}

/// One row of the dispatch table. Empty `keywords` means "default for this
/// subject".
pub struct TemplateBranch {
    pub subject: &'static str,
    pub keywords: &'static [&'static str],
    pub record: TemplateRecord,
}

/// The subject-independent part shared by every Arabic-language plan.
pub struct SharedRecord {
    pub teaching_strategies: &'static [&'static str],
    pub assessment_strategies: &'static [&'static str],
    pub assessment_tools: &'static [&'static str],
    pub time_management: &'static [StepTemplate],
    pub self_reflection: &'static str,
    pub challenges_faced: &'static str,
    pub improvement_suggestions: &'static str,
}

pub static SHARED: SharedRecord = SharedRecord {
    teaching_strategies: &[
        "التعلم التعاوني",
        "العصف الذهني",
        "الاستقصاء",
        "حل المشكلات",
        "التعلم النشط",
    ],
    assessment_strategies: &[
        "التقويم التكويني",
        "التقويم الختامي",
        "التقويم المعتمد على الأداء",
    ],
    assessment_tools: &["سلم تقدير", "قائمة رصد", "اختبارات قصيرة"],
    time_management: &[
        StepTemplate {
            activity: "التمهيد وتنشيط المعرفة السابقة",
            time: "5 دقائق",
        },
        StepTemplate {
            activity: "عرض المفاهيم الرئيسية للدرس",
            time: "15 دقيقة",
        },
        StepTemplate {
            activity: "تطبيق عملي وأنشطة تفاعلية",
            time: "15 دقيقة",
        },
        StepTemplate {
            activity: "مناقشة وتحليل نتائج الأنشطة",
            time: "10 دقائق",
        },
        StepTemplate {
            activity: "تلخيص وتقييم",
            time: "5 دقائق",
        },
    ],
    self_reflection: "شعرت بالرضا عن تفاعل الطلبة مع الأنشطة المختلفة وتحقيق أهداف الدرس ضمن الخطة الزمنية المحددة",
    challenges_faced: "تباين مستويات الطلبة في استيعاب بعض المفاهيم المرتبطة بالدرس والحاجة إلى وقت إضافي لتوضيح بعض النقاط",
    improvement_suggestions: "تنويع الأنشطة التعليمية بشكل أكبر واستخدام وسائل تكنولوجية إضافية لتعزيز فهم الطلبة وفق احتياجاتهم المختلفة",
};

/// Placeholder rows for the Arabic follow-up table.
pub static FOLLOW_UP_ARABIC: &[FollowUpTemplate] = &[
    FollowUpTemplate {
        section: "أ",
        class: "1",
        achieved_outcomes: "تم تحقيق النتاجات المخطط لها بنسبة 85%",
        homework: "حل أسئلة الكتاب صفحة 45",
    },
    FollowUpTemplate {
        section: "ب",
        class: "1",
        achieved_outcomes: "تم تحقيق النتاجات المخطط لها بنسبة 90%",
        homework: "حل أسئلة الكتاب صفحة 45",
    },
];

/// Placeholder rows for the English follow-up table.
pub static FOLLOW_UP_ENGLISH: &[FollowUpTemplate] = &[
    FollowUpTemplate {
        section: "A",
        class: "10",
        achieved_outcomes: "Most students achieved the learning objectives",
        homework: "Workbook exercises 1-3, page 24",
    },
    FollowUpTemplate {
        section: "B",
        class: "10",
        achieved_outcomes: "All students achieved the learning objectives",
        homework: "Workbook exercises 1-3, page 24",
    },
];

/// Generic default for subjects with no dedicated branch group.
pub static DEFAULT_RECORD: TemplateRecord = TemplateRecord {
    objectives: &[
        "أن يتعرف الطالب على المفاهيم الأساسية المرتبطة بـ{title}",
        "أن يشرح الطالب العناصر الرئيسية في {title}",
        "أن يحلل الطالب محتوى {title} بطريقة منهجية",
        "أن يطبق الطالب المعرفة المكتسبة من {title} في مواقف جديدة",
        "أن يقيّم الطالب أهمية {title} في سياق المادة الدراسية",
        "أن يبدع الطالب تطبيقات جديدة تعكس فهمه لـ{title}",
    ],
    materials_and_resources: &[
        "كتاب {subject} المقرر من وزارة التربية والتعليم الأردنية",
        "وسائل تعليمية سمعية وبصرية مرتبطة بالدرس",
        "أوراق عمل وأنشطة إثرائية",
        "مصادر تعلم رقمية معتمدة من الوزارة",
        "مواد تقييم متنوعة",
    ],
    procedures: &[
        StepTemplate {
            activity: "التمهيد للدرس وربطه بالخبرات السابقة للطلبة حول {title}",
            time: "5 دقائق",
        },
        StepTemplate {
            activity: "عرض المفاهيم الرئيسية لـ{title} بطريقة منظمة ومشوقة",
            time: "15 دقيقة",
        },
        StepTemplate {
            activity: "تنفيذ أنشطة تطبيقية متنوعة على {title}",
            time: "15 دقيقة",
        },
        StepTemplate {
            activity: "مناقشة وتحليل نتائج الأنشطة وتقديم التغذية الراجعة",
            time: "10 دقائق",
        },
        StepTemplate {
            activity: "تلخيص أهم النقاط في الدرس وتقييم تعلم الطلبة",
            time: "5 دقائق",
        },
    ],
    prior_learning: "المفاهيم والمهارات الأساسية المرتبطة بـ{title} وفق المنهاج الأردني للصفوف السابقة",
    horizontal_integration: "ربط {title} بالمواد الدراسية الأخرى ذات الصلة وبالبيئة المحلية الأردنية",
    vertical_integration: "سيتوسع الطلبة في الصفوف العليا وفق المنهاج الأردني في دراسة {title} بشكل أكثر عمقاً وشمولية",
};

/// The dispatch table. Order is the precedence order.
pub static BRANCHES: &[TemplateBranch] = &[
    // --- العلوم ---
    TemplateBranch {
        subject: SUBJECT_SCIENCE,
        keywords: &["الدم", "الدورة الدموية", "القلب"],
        record: TemplateRecord {
            objectives: &[
                "أن يصف الطالب تركيب {title} في جسم الإنسان",
                "أن يوضح الطالب آلية عمل {title} في الجسم",
                "أن يبين الطالب وظائف {title} المختلفة",
                "أن يستنتج الطالب أهمية {title} في الحفاظ على الاتزان الداخلي للجسم",
                "أن يصمم الطالب نموذجاً يوضح آلية عمل {title}",
                "أن يقترح الطالب طرقاً للمحافظة على صحة {title}",
            ],
            materials_and_resources: &[
                "كتاب العلوم للصف المقرر في المنهاج الأردني",
                "نماذج توضيحية ثلاثية الأبعاد لـ{title}",
                "صور ومخططات لـ{title}",
                "عرض فيديو عن {title} من مصادر معتمدة من وزارة التربية والتعليم",
                "أوراق عمل معدة وفق الأهداف التعليمية للدرس",
            ],
            procedures: &[
                StepTemplate {
                    activity: "التمهيد للدرس من خلال ربط المعرفة السابقة بموضوع {title} وتحفيز الطلبة للتعلم",
                    time: "5 دقائق",
                },
                StepTemplate {
                    activity: "عرض فيديو قصير عن {title} ومناقشة محتواه",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "شرح تركيب ووظائف {title} باستخدام النماذج والصور التوضيحية",
                    time: "15 دقيقة",
                },
                StepTemplate {
                    activity: "نشاط جماعي: تقسيم الطلبة إلى مجموعات لعمل مخطط مفاهيمي لـ{title}",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "عرض نتائج عمل المجموعات ومناقشتها",
                    time: "5 دقائق",
                },
                StepTemplate {
                    activity: "تلخيص الدرس وتقديم التغذية الراجعة وتوزيع الواجب المنزلي",
                    time: "5 دقائق",
                },
            ],
            prior_learning: "معرفة الطلبة بتركيب جسم الإنسان وأجهزته الرئيسية وفق المنهاج الأردني للصفوف السابقة",
            horizontal_integration: "التربية الصحية (العادات الصحية للحفاظ على سلامة {title})، الرياضيات (حساب معدلات ضربات القلب والضغط)",
            vertical_integration: "سيتعلم الطلبة في الصفوف اللاحقة وفق المنهاج الأردني مزيداً من التفاصيل عن أمراض {title} وطرق الوقاية منها والعلاقة بين {title} وباقي أجهزة الجسم",
        },
    },
    TemplateBranch {
        subject: SUBJECT_SCIENCE,
        keywords: &["الضوء", "البصريات", "العدسات"],
        record: TemplateRecord {
            objectives: &[
                "أن يشرح الطالب خصائص {title} وفق مفاهيم الفيزياء الأساسية",
                "أن يصف الطالب ظاهرة انعكاس {title} وفق قوانينها",
                "أن يوضح الطالب ظاهرة انكسار {title} بالرسم والمعادلات الرياضية",
                "أن يميز الطالب بين أنواع العدسات وخصائصها البصرية",
                "أن يطبق الطالب قوانين {title} في حل مسائل عملية",
                "أن ينفذ الطالب تجارب عملية تبين خصائص {title}",
            ],
            materials_and_resources: &[
                "كتاب العلوم المقرر من وزارة التربية والتعليم الأردنية",
                "مجموعة عدسات (محدبة ومقعرة) ومرايا",
                "مصادر ضوئية مختلفة (ليزر، مصباح)",
                "منشور زجاجي وأدوات بصرية متنوعة",
                "أوراق عمل وتجارب عملية معدة وفق النتاجات",
            ],
            procedures: &[
                StepTemplate {
                    activity: "التمهيد للدرس بعرض ظواهر بصرية مرتبطة بـ{title} من البيئة المحلية الأردنية",
                    time: "5 دقائق",
                },
                StepTemplate {
                    activity: "إجراء تجربة عملية توضح ظاهرة انعكاس {title} مع مناقشة النتائج",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "شرح قوانين {title} وتطبيقاتها في الحياة العملية",
                    time: "15 دقيقة",
                },
                StepTemplate {
                    activity: "نشاط مجموعات: إجراء تجارب عملية لاكتشاف خصائص {title} من خلال الاستقصاء",
                    time: "15 دقائق",
                },
                StepTemplate {
                    activity: "تقديم المجموعات لنتائج تجاربها ومناقشتها بشكل تشاركي",
                    time: "5 دقائق",
                },
                StepTemplate {
                    activity: "تلخيص المفاهيم الرئيسية وتقييم فهم الطلبة وتحديد الواجب المنزلي",
                    time: "5 دقائق",
                },
            ],
            prior_learning: "المفاهيم الفيزيائية الأساسية للموجات والطاقة وفق المنهاج الأردني للصفوف السابقة",
            horizontal_integration: "الرياضيات (تطبيق القوانين والمعادلات الرياضية في حساب زوايا انعكاس وانكسار {title})، التكنولوجيا (تطبيقات {title} في الأجهزة الحديثة)",
            vertical_integration: "سيدرس الطلبة في الصفوف العليا وفق المنهاج الأردني مفاهيم متقدمة في {title} مثل التداخل والحيود والاستقطاب وتطبيقاتها في التقنيات الحديثة",
        },
    },
    TemplateBranch {
        subject: SUBJECT_SCIENCE,
        keywords: &["النبات", "النباتات", "الزهرة"],
        record: TemplateRecord {
            objectives: &[
                "أن يتعرف الطالب على الأجزاء الرئيسية لـ{title} ووظائفها",
                "أن يشرح الطالب عملية التمثيل الضوئي في {title}",
                "أن يصف الطالب آلية امتصاص الماء والأملاح في {title}",
                "أن يقارن الطالب بين أنواع {title} في البيئة الأردنية",
                "أن يستنتج الطالب أهمية {title} في التوازن البيئي",
                "أن يصمم الطالب نموذجاً يوضح تركيب {title}",
            ],
            materials_and_resources: &[
                "كتاب العلوم المقرر من وزارة التربية والتعليم الأردنية",
                "عينات نباتية من البيئة المحلية الأردنية",
                "مجهر ضوئي وشرائح مجهرية جاهزة",
                "صور وفيديوهات تعليمية عن النباتات المحلية",
                "أدوات تشريح وأوراق عمل",
            ],
            procedures: &[
                StepTemplate {
                    activity: "التمهيد للدرس بعرض صور متنوعة لـ{title} من البيئة الأردنية ومناقشة أهميتها",
                    time: "5 دقائق",
                },
                StepTemplate {
                    activity: "عرض عينات حقيقية لـ{title} وتحديد أجزائها الرئيسية",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "شرح وظائف أجزاء {title} المختلفة باستخدام النماذج والصور",
                    time: "15 دقيقة",
                },
                StepTemplate {
                    activity: "نشاط عملي: فحص أنسجة {title} تحت المجهر ورسم المشاهدات",
                    time: "15 دقائق",
                },
                StepTemplate {
                    activity: "مناقشة نتائج النشاط العملي والربط مع المفاهيم النظرية",
                    time: "5 دقائق",
                },
                StepTemplate {
                    activity: "تقييم فهم الطلبة وتلخيص الدرس وتوزيع الواجب المنزلي",
                    time: "5 دقائق",
                },
            ],
            prior_learning: "معرفة الطلبة بتصنيف الكائنات الحية وخصائصها وفق المنهاج الأردني للصفوف السابقة",
            horizontal_integration: "الجغرافيا (توزيع النباتات في البيئات الأردنية المختلفة)، التربية المهنية (زراعة {title} والعناية بها)",
            vertical_integration: "سيتعمق الطلبة في الصفوف العليا وفق المنهاج الأردني في دراسة التكاثر والهرمونات النباتية والتعديل الوراثي في {title}",
        },
    },
    TemplateBranch {
        subject: SUBJECT_SCIENCE,
        keywords: &[],
        record: TemplateRecord {
            objectives: &[
                "أن يتعرف الطالب على المفاهيم العلمية الأساسية المرتبطة بـ{title}",
                "أن يشرح الطالب العمليات والظواهر المتعلقة بـ{title}",
                "أن يستقصي الطالب العوامل المؤثرة في {title} بطريقة علمية",
                "أن يجري الطالب تجارب عملية تتعلق بـ{title}",
                "أن يطبق الطالب المفاهيم العلمية المرتبطة بـ{title} في مواقف حياتية",
                "أن يقيّم الطالب أهمية {title} في تفسير الظواهر الطبيعية",
            ],
            materials_and_resources: &[
                "كتاب العلوم المقرر من وزارة التربية والتعليم الأردنية",
                "أدوات ومواد مخبرية مناسبة لإجراء التجارب العملية",
                "عروض تقديمية وفيديوهات تعليمية مرتبطة بالدرس",
                "أوراق عمل وأنشطة استقصائية معدة وفق النتاجات",
                "مصادر إثرائية معتمدة من الوزارة",
            ],
            procedures: &[
                StepTemplate {
                    activity: "التمهيد للدرس بتنشيط المعرفة السابقة للطلبة حول {title} وربطها بواقعهم",
                    time: "5 دقائق",
                },
                StepTemplate {
                    activity: "تقديم المفاهيم العلمية الأساسية لـ{title} بأسلوب شيق وتفاعلي",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "إجراء تجربة عملية توضح المبادئ العلمية المرتبطة بـ{title}",
                    time: "15 دقيقة",
                },
                StepTemplate {
                    activity: "نشاط تعاوني: تحليل بيانات ونتائج متعلقة بـ{title} واستخلاص استنتاجات",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "مناقشة نتائج النشاط التعاوني وتعزيز المفاهيم الصحيحة",
                    time: "5 دقائق",
                },
                StepTemplate {
                    activity: "تقييم تعلم الطلبة من خلال أسئلة ختامية وتقديم التغذية الراجعة",
                    time: "5 دقائق",
                },
            ],
            prior_learning: "المفاهيم العلمية الأساسية المرتبطة بـ{title} وفق المنهاج الأردني للصفوف السابقة",
            horizontal_integration: "الرياضيات (تحليل البيانات والرسوم البيانية المرتبطة بـ{title})، التكنولوجيا (استخدام التطبيقات الرقمية في دراسة {title})",
            vertical_integration: "سيتوسع الطلبة في الصفوف العليا وفق المنهاج الأردني في دراسة {title} بشكل أكثر تعمقاً وتطبيقاته المتقدمة",
        },
    },
    // --- الرياضيات ---
    TemplateBranch {
        subject: SUBJECT_MATH,
        keywords: &["الكسور", "كسور"],
        record: TemplateRecord {
            objectives: &[
                "أن يميز الطالب بين أنواع {title} (عادية، عشرية، نسبة مئوية)",
                "أن يجري الطالب العمليات الحسابية على {title} بدقة",
                "أن يحول الطالب بين صور {title} المختلفة",
                "أن يوظف الطالب {title} في حل مسائل حياتية من البيئة الأردنية",
                "أن يقارن الطالب بين {title} المختلفة باستخدام علامات المقارنة المناسبة",
                "أن يمثل الطالب {title} بيانياً على خط الأعداد",
            ],
            materials_and_resources: &[
                "كتاب الرياضيات المقرر من وزارة التربية والتعليم الأردنية",
                "نماذج محسوسة للكسور (قطع دينز، نماذج ورقية)",
                "ألعاب تعليمية وبطاقات عمل للكسور",
                "برمجيات تفاعلية معتمدة من وزارة التربية والتعليم",
                "أوراق عمل وتمارين إضافية",
            ],
            procedures: &[
                StepTemplate {
                    activity: "التمهيد بمراجعة المعرفة السابقة عن {title} من خلال نشاط تحفيزي",
                    time: "5 دقائق",
                },
                StepTemplate {
                    activity: "تقديم مفهوم {title} وأنواعها باستخدام النماذج المحسوسة",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "شرح العمليات الحسابية على {title} مع أمثلة متنوعة",
                    time: "15 دقيقة",
                },
                StepTemplate {
                    activity: "تدريب موجه: حل تمارين متدرجة الصعوبة على {title}",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "نشاط تعاوني: حل مسائل حياتية من البيئة الأردنية تتضمن {title}",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "تلخيص المفاهيم الرئيسية وتقييم فهم الطلبة من خلال أسئلة ختامية",
                    time: "5 دقائق",
                },
            ],
            prior_learning: "مفاهيم الأعداد الصحيحة والعمليات الحسابية الأساسية وفق المنهاج الأردني للصفوف السابقة",
            horizontal_integration: "العلوم (استخدام {title} في القياسات والتحويلات)، التربية المهنية (تطبيق {title} في الطبخ والنجارة)",
            vertical_integration: "سيتوسع الطلبة في الصفوف العليا وفق المنهاج الأردني في دراسة {title} العشرية والنسب المئوية والنسب والتناسب",
        },
    },
    TemplateBranch {
        subject: SUBJECT_MATH,
        keywords: &["الهندسة", "المثلث", "المربع", "الدائرة"],
        record: TemplateRecord {
            objectives: &[
                "أن يتعرف الطالب على خصائص {title} وعناصره الأساسية",
                "أن يحسب الطالب محيط ومساحة {title} باستخدام القوانين الصحيحة",
                "أن يرسم الطالب {title} باستخدام الأدوات الهندسية بدقة",
                "أن يحل الطالب مسائل تطبيقية على {title} من البيئة الأردنية",
                "أن يستنتج الطالب العلاقات الهندسية المرتبطة بـ{title}",
                "أن يربط الطالب خصائص {title} بتطبيقاته في الفن الإسلامي والعمارة الأردنية",
            ],
            materials_and_resources: &[
                "كتاب الرياضيات المقرر من وزارة التربية والتعليم الأردنية",
                "أدوات هندسية (مسطرة، منقلة، فرجار، مثلثات)",
                "نماذج ومجسمات للأشكال الهندسية",
                "تطبيقات وبرمجيات الهندسة التفاعلية مثل GeoGebra",
                "صور من البيئة الأردنية تظهر فيها الأشكال الهندسية",
            ],
            procedures: &[
                StepTemplate {
                    activity: "التمهيد بعرض أمثلة من العمارة الأردنية توضح {title} ومناقشتها",
                    time: "5 دقائق",
                },
                StepTemplate {
                    activity: "تقديم خصائص {title} وعناصره باستخدام النماذج والرسومات",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "شرح قوانين المساحة والمحيط لـ{title} مع أمثلة تطبيقية",
                    time: "15 دقيقة",
                },
                StepTemplate {
                    activity: "تدريب عملي: رسم {title} باستخدام الأدوات الهندسية وتحديد خصائصه",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "نشاط تعاوني: حل مسائل هندسية تطبيقية على {title} من البيئة المحلية",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "تلخيص المفاهيم الرئيسية وتقييم فهم الطلبة وتوزيع الواجب المنزلي",
                    time: "5 دقائق",
                },
            ],
            prior_learning: "المفاهيم الأساسية في القياس والهندسة وفق المنهاج الأردني للصفوف السابقة",
            horizontal_integration: "الفنون (تطبيق خصائص {title} في الفن الإسلامي والزخرفة)، العلوم (استخدام {title} في تفسير الظواهر الطبيعية)",
            vertical_integration: "سيدرس الطلبة في الصفوف العليا وفق المنهاج الأردني نظريات وقوانين متقدمة في {title} وتطبيقاتها في الهندسة الفراغية",
        },
    },
    TemplateBranch {
        subject: SUBJECT_MATH,
        keywords: &["الجبر", "المعادلات", "المتباينات"],
        record: TemplateRecord {
            objectives: &[
                "أن يتعرف الطالب على مفهوم {title} وخصائصها",
                "أن يميز الطالب بين أنواع {title} المختلفة",
                "أن يحل الطالب {title} بطرق مختلفة",
                "أن يمثل الطالب {title} بيانياً",
                "أن يصوغ الطالب مسائل حياتية من البيئة الأردنية على شكل {title}",
                "أن يطبق الطالب {title} في حل مشكلات واقعية",
            ],
            materials_and_resources: &[
                "كتاب الرياضيات المقرر من وزارة التربية والتعليم الأردنية",
                "أوراق عمل مدرجة بمستويات مختلفة",
                "برمجيات وتطبيقات رياضية معتمدة مثل GeoGebra",
                "بطاقات للمفاهيم والرموز الجبرية",
                "نماذج لمسائل حياتية من البيئة الأردنية",
            ],
            procedures: &[
                StepTemplate {
                    activity: "التمهيد بطرح مشكلة حياتية من البيئة الأردنية وكيفية تمثيلها بـ{title}",
                    time: "5 دقائق",
                },
                StepTemplate {
                    activity: "تقديم مفهوم {title} وأنواعها باستخدام أمثلة متنوعة",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "شرح طرق حل {title} مع تطبيقات متدرجة الصعوبة",
                    time: "15 دقيقة",
                },
                StepTemplate {
                    activity: "تدريب موجه: حل {title} وتمثيلها بيانياً",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "نشاط تعاوني: صياغة مسائل حياتية من البيئة الأردنية وتمثيلها بـ{title}",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "تلخيص المفاهيم الرئيسية وتقييم فهم الطلبة من خلال مسائل تطبيقية",
                    time: "5 دقائق",
                },
            ],
            prior_learning: "العمليات الحسابية الأساسية والتعبيرات الجبرية وفق المنهاج الأردني للصفوف السابقة",
            horizontal_integration: "العلوم (تطبيق {title} في حل مسائل فيزيائية)، الاقتصاد المنزلي (استخدام {title} في حساب التكاليف والميزانية)",
            vertical_integration: "سيتعلم الطلبة في الصفوف العليا وفق المنهاج الأردني {title} من الدرجة الثانية وأنظمة المعادلات وتطبيقاتها المتقدمة",
        },
    },
    TemplateBranch {
        subject: SUBJECT_MATH,
        keywords: &[],
        record: TemplateRecord {
            objectives: &[
                "أن يتعرف الطالب على المفاهيم الرياضية الأساسية المرتبطة بـ{title}",
                "أن يطبق الطالب القوانين والعمليات على {title}",
                "أن يحل الطالب مسائل رياضية متنوعة تتعلق بـ{title}",
                "أن يوظف الطالب {title} في حل مشكلات حياتية من البيئة الأردنية",
                "أن يستنتج الطالب العلاقات والأنماط الرياضية في {title}",
                "أن يبرر الطالب الحلول والاستنتاجات المرتبطة بـ{title}",
            ],
            materials_and_resources: &[
                "كتاب الرياضيات المقرر من وزارة التربية والتعليم الأردنية",
                "وسائل تعليمية محسوسة مناسبة للمفهوم الرياضي",
                "برمجيات وتطبيقات رياضية معتمدة",
                "أوراق عمل وتمارين إضافية متدرجة الصعوبة",
                "وسائل تقييم متنوعة (اختبارات قصيرة، بطاقات خروج)",
            ],
            procedures: &[
                StepTemplate {
                    activity: "التمهيد باستراتيجية تنشيط المعرفة السابقة حول {title}",
                    time: "5 دقائق",
                },
                StepTemplate {
                    activity: "تقديم المفاهيم الرياضية الأساسية لـ{title} بطريقة محسوسة",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "شرح القوانين والعمليات المرتبطة بـ{title} مع أمثلة متنوعة",
                    time: "15 دقيقة",
                },
                StepTemplate {
                    activity: "تدريب موجه: حل تمارين متدرجة الصعوبة على {title}",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "نشاط تطبيقي: حل مسائل حياتية من البيئة الأردنية تتعلق بـ{title}",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "تلخيص المفاهيم الرئيسية وتقييم تعلم الطلبة وتوزيع الواجب المنزلي",
                    time: "5 دقائق",
                },
            ],
            prior_learning: "المفاهيم والمهارات الرياضية الأساسية المرتبطة بـ{title} وفق المنهاج الأردني للصفوف السابقة",
            horizontal_integration: "العلوم (تطبيق المفاهيم الرياضية في {title} على الظواهر العلمية)، الدراسات الاجتماعية (استخدام البيانات والإحصاءات عن الأردن)",
            vertical_integration: "سيتوسع الطلبة في الصفوف العليا وفق المنهاج الأردني في دراسة مفاهيم {title} بشكل أكثر تجريداً وتعقيداً",
        },
    },
    // --- اللغة العربية ---
    TemplateBranch {
        subject: SUBJECT_ARABIC,
        keywords: &["قصة", "قصص", "رواية", "حكاية"],
        record: TemplateRecord {
            objectives: &[
                "أن يقرأ الطالب {title} قراءة جهرية سليمة مراعياً علامات الترقيم",
                "أن يحدد الطالب العناصر الفنية في {title} (الشخصيات، الزمان، المكان، الحبكة)",
                "أن يستخرج الطالب الأفكار الرئيسية والفرعية من {title}",
                "أن يحلل الطالب أحداث {title} وتسلسلها المنطقي",
                "أن يستنتج الطالب القيم والدروس المستفادة من {title}",
                "أن يعيد الطالب سرد {title} بأسلوبه الخاص",
            ],
            materials_and_resources: &[
                "كتاب اللغة العربية المقرر من وزارة التربية والتعليم الأردنية",
                "نص القصة مطبوعاً بشكل واضح",
                "بطاقات الكلمات الصعبة ومعانيها",
                "صور توضيحية للأحداث والشخصيات",
                "خريطة مفاهيمية لعناصر القصة",
            ],
            procedures: &[
                StepTemplate {
                    activity: "التمهيد بمناقشة صور أو عنوان {title} لإثارة دافعية الطلبة",
                    time: "5 دقائق",
                },
                StepTemplate {
                    activity: "قراءة نموذجية لـ{title} من قبل المعلم مع مراعاة التنغيم المناسب",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "قراءات فردية من الطلبة مع التصويب اللغوي",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "تحليل عناصر {title} ومناقشة الأحداث والشخصيات",
                    time: "15 دقيقة",
                },
                StepTemplate {
                    activity: "نشاط إبداعي: تمثيل مشهد من {title} أو رسم لوحة تعبيرية عنها",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "تلخيص الدرس واستخلاص القيم والدروس المستفادة",
                    time: "5 دقائق",
                },
            ],
            prior_learning: "مهارات القراءة الجهرية وتحليل النصوص الأدبية وفق المنهاج الأردني للصفوف السابقة",
            horizontal_integration: "التربية الإسلامية (القيم والأخلاق في {title})، التاريخ (ربط أحداث {title} بالتاريخ الأردني إن أمكن)",
            vertical_integration: "سيتعمق الطلبة في الصفوف العليا وفق المنهاج الأردني في تحليل {title} ودراسة الفنون الأدبية بشكل أكثر تفصيلاً",
        },
    },
    TemplateBranch {
        subject: SUBJECT_ARABIC,
        keywords: &["نحو", "قواعد", "إعراب"],
        record: TemplateRecord {
            objectives: &[
                "أن يتعرف الطالب على مفهوم {title} وأقسامه",
                "أن يميز الطالب بين أنواع {title} في الجمل المختلفة",
                "أن يعرب الطالب الكلمات والجمل إعراباً صحيحاً",
                "أن يستخرج الطالب أمثلة على {title} من نصوص مختارة",
                "أن يوظف الطالب {title} في جمل من إنشائه",
                "أن يصحح الطالب الأخطاء النحوية المرتبطة بـ{title}",
            ],
            materials_and_resources: &[
                "كتاب اللغة العربية المقرر من وزارة التربية والتعليم الأردنية",
                "لوحات تعليمية جدارية توضح القواعد النحوية",
                "بطاقات تعليمية للمفاهيم النحوية",
                "نصوص مختارة للتطبيق النحوي",
                "أوراق عمل وتدريبات متنوعة",
            ],
            procedures: &[
                StepTemplate {
                    activity: "التمهيد باستخراج أمثلة على {title} من نص قصير",
                    time: "5 دقائق",
                },
                StepTemplate {
                    activity: "شرح مفهوم {title} وأقسامه باستخدام الأمثلة التوضيحية",
                    time: "15 دقيقة",
                },
                StepTemplate {
                    activity: "عرض أمثلة متنوعة على السبورة وتحليلها",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "تدريبات فردية على الإعراب والتطبيق النحوي",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "نشاط تعاوني: استخراج أمثلة من نصوص مختلفة وإعرابها",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "تلخيص القاعدة النحوية وتقييم فهم الطلبة",
                    time: "5 دقائق",
                },
            ],
            prior_learning: "المفاهيم النحوية الأساسية وأقسام الكلام وفق المنهاج الأردني للصفوف السابقة",
            horizontal_integration: "جميع المواد الدراسية من خلال القراءة والكتابة السليمة",
            vertical_integration: "سيدرس الطلبة في الصفوف العليا وفق المنهاج الأردني قواعد نحوية أكثر تعقيداً مبنية على مفهوم {title}",
        },
    },
    TemplateBranch {
        subject: SUBJECT_ARABIC,
        keywords: &["بلاغة", "تشبيه", "استعارة", "كناية"],
        record: TemplateRecord {
            objectives: &[
                "أن يتعرف الطالب على مفهوم {title} وأنواعه",
                "أن يميز الطالب بين {title} وغيره من الأساليب البلاغية",
                "أن يحلل الطالب نصوصاً أدبية تتضمن {title}",
                "أن يستخرج الطالب أمثلة على {title} من نصوص مختارة",
                "أن يوظف الطالب {title} في تعبيره الكتابي",
                "أن يذوق الطالب جمال التعبير البلاغي في {title}",
            ],
            materials_and_resources: &[
                "كتاب اللغة العربية المقرر من وزارة التربية والتعليم الأردنية",
                "نصوص أدبية مختارة تتضمن الأساليب البلاغية",
                "لوحات جدارية توضح أنواع الأساليب البلاغية",
                "بطاقات للأمثلة البلاغية وشرحها",
                "أوراق عمل وتدريبات تطبيقية",
            ],
            procedures: &[
                StepTemplate {
                    activity: "التمهيد بعرض أمثلة أدبية جميلة تتضمن {title}",
                    time: "5 دقائق",
                },
                StepTemplate {
                    activity: "شرح مفهوم {title} وأنواعه مع التمثيل",
                    time: "15 دقيقة",
                },
                StepTemplate {
                    activity: "تحليل نماذج من {title} في نصوص مختارة",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "تدريبات فردية على استخراج وتحليل الصور البلاغية",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "نشاط إبداعي: كتابة فقرات قصيرة توظف {title}",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "عرض إنتاج الطلبة ومناقشته وتقييمه",
                    time: "5 دقائق",
                },
            ],
            prior_learning: "المفاهيم اللغوية الأساسية وتذوق النصوص الأدبية وفق المنهاج الأردني للصفوف السابقة",
            horizontal_integration: "التربية الإسلامية (التذوق البلاغي للنصوص القرآنية والحديث الشريف)، التاريخ (دراسة النصوص الأدبية في سياقها التاريخي)",
            vertical_integration: "سيتوسع الطلبة في الصفوف العليا وفق المنهاج الأردني في دراسة الفنون البلاغية المختلفة وعلاقتها بـ{title}",
        },
    },
    TemplateBranch {
        subject: SUBJECT_ARABIC,
        keywords: &[],
        record: TemplateRecord {
            objectives: &[
                "أن يقرأ الطالب نصوص {title} قراءة سليمة مراعياً مخارج الحروف",
                "أن يحلل الطالب بنية {title} وخصائصه اللغوية",
                "أن يستخرج الطالب الأفكار الرئيسية والفرعية في {title}",
                "أن يوظف الطالب مفردات وتراكيب جديدة من {title} في سياقات لغوية مختلفة",
                "أن يعبر الطالب عن فهمه لـ{title} شفوياً وكتابياً",
                "أن يبدي الطالب رأيه في {title} مع التعليل",
            ],
            materials_and_resources: &[
                "كتاب اللغة العربية المقرر من وزارة التربية والتعليم الأردنية",
                "نصوص إثرائية مرتبطة بالدرس",
                "بطاقات للمفردات الجديدة ومعانيها",
                "وسائل سمعية وبصرية مساندة",
                "أوراق عمل وأنشطة تطبيقية متنوعة",
            ],
            procedures: &[
                StepTemplate {
                    activity: "التمهيد بإثارة انتباه الطلبة نحو موضوع {title} من خلال أسئلة تحفيزية",
                    time: "5 دقائق",
                },
                StepTemplate {
                    activity: "قراءة نموذجية لـ{title} مع مراعاة جودة الأداء",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "قراءات فردية من الطلبة مع التصويب والتوجيه",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "شرح المفردات الجديدة وتحليل محتوى {title}",
                    time: "15 دقيقة",
                },
                StepTemplate {
                    activity: "نشاط تطبيقي على {title} (تلخيص، إعادة صياغة، تعبير موجه)",
                    time: "10 دقائق",
                },
                StepTemplate {
                    activity: "تقييم فهم الطلبة من خلال أسئلة شاملة وتلخيص لأهم النقاط",
                    time: "5 دقائق",
                },
            ],
            prior_learning: "المهارات اللغوية الأساسية في القراءة والكتابة والتحدث والاستماع وفق المنهاج الأردني للصفوف السابقة",
            horizontal_integration: "التربية الاجتماعية (ربط موضوع {title} بالبيئة الأردنية)، التربية الإسلامية (استخراج القيم والمبادئ من {title})",
            vertical_integration: "سيتعمق الطلبة في الصفوف العليا وفق المنهاج الأردني في دراسة الأنماط اللغوية المختلفة وصولاً إلى التحليل النقدي لـ{title}",
        },
    },
];

/// The complete English-language record. Unlike the Arabic branches this is
/// self-contained: the shared Arabic record never applies to it.
pub struct EnglishRecord {
    pub objectives: &'static [&'static str],
    pub teaching_strategies: &'static [&'static str],
    pub assessment_strategies: &'static [&'static str],
    pub assessment_tools: &'static [&'static str],
    pub materials_and_resources: &'static [&'static str],
    pub time_management: &'static [StepTemplate],
    pub procedures: &'static [StepTemplate],
    pub prior_learning: &'static str,
    pub horizontal_integration: &'static str,
    pub vertical_integration: &'static str,
    pub self_reflection: &'static str,
    pub challenges_faced: &'static str,
    pub improvement_suggestions: &'static str,
    pub number_of_classes: &'static str,
}

pub static ENGLISH: EnglishRecord = EnglishRecord {
    objectives: &[
        "Students will be able to understand the main ideas of {title}",
        "Students will be able to use key vocabulary related to {title}",
        "Students will be able to practice speaking about {title}",
        "Students will be able to write short paragraphs about {title}",
        "Students will be able to answer comprehension questions about {title}",
    ],
    teaching_strategies: &[
        "Communicative approach",
        "Task-based learning",
        "Total physical response (TPR)",
        "Collaborative learning",
        "Direct method",
    ],
    assessment_strategies: &[
        "Formative assessment",
        "Peer assessment",
        "Self-assessment",
        "Performance-based assessment",
    ],
    assessment_tools: &["Rubrics", "Oral presentations", "Written assignments", "Quizzes"],
    materials_and_resources: &[
        "Student's Book",
        "Workbook",
        "Flashcards related to the lesson",
        "Audio recordings",
        "Interactive whiteboard resources",
    ],
    time_management: &[
        StepTemplate {
            activity: "Warm-up activity and review of previous lesson",
            time: "5 minutes",
        },
        StepTemplate {
            activity: "Presentation of new vocabulary and structures",
            time: "15 minutes",
        },
        StepTemplate {
            activity: "Guided practice activities",
            time: "15 minutes",
        },
        StepTemplate {
            activity: "Independent practice and application",
            time: "10 minutes",
        },
        StepTemplate {
            activity: "Wrap-up and assessment",
            time: "5 minutes",
        },
    ],
    procedures: &[
        StepTemplate {
            activity: "Warm-up: Show pictures related to {title} and ask students to identify what they see",
            time: "5 minutes",
        },
        StepTemplate {
            activity: "Presentation: Introduce new vocabulary and structures related to {title} using visuals and realia",
            time: "10 minutes",
        },
        StepTemplate {
            activity: "Guided Practice: Have students practice using the new language in pairs or small groups",
            time: "15 minutes",
        },
        StepTemplate {
            activity: "Production: Students create their own dialogues or written work using the target language",
            time: "15 minutes",
        },
        StepTemplate {
            activity: "Closure: Review the main points of the lesson and assign homework",
            time: "5 minutes",
        },
    ],
    prior_learning: "Students have already learned basic vocabulary and structures related to similar topics in previous grades according to the Jordan national curriculum",
    horizontal_integration: "This lesson integrates with Social Studies (cultural aspects of {title}) and Art (creating visual representations)",
    vertical_integration: "This knowledge will be expanded in future grades with more complex vocabulary and grammatical structures related to {title}",
    self_reflection: "The lesson was well-received by the students. They participated actively in all activities and demonstrated understanding of the key concepts.",
    challenges_faced: "Some students struggled with pronouncing certain words. More pronunciation practice should be incorporated in future lessons.",
    improvement_suggestions: "Include more visual aids and real-life examples to enhance understanding. Consider grouping students of mixed abilities to support weaker students.",
    number_of_classes: "5",
};
