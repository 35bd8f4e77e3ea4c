//! Arabic content, rendered right-to-left.

use crate::tree::*;

pub static CONTENT: ContentTree = ContentTree {
    label: "العربية",
    nav: NavText {
        home: "الرئيسية",
        about: "معلومات عنا",
        rooms: "الغرف والأسعار",
        facilities: "المرافق",
        contact: "اتصل بنا",
    },
    hero: HeroText {
        location_badge: "سوخومفيت 71 • بريدي بانوميونغ 14",
        title: "شقق فاخرة بنمط كوندومينيوم",
        subtitle: "استمتع بحياة المدينة المثالية. هدوء، خصوصية. بالقرب من محطة بي تي إس فرا خانونغ.",
        cta_rooms: "عرض الغرف",
        cta_contact: "اتصل بنا",
    },
    about: AboutText {
        welcome: "مرحباً بكم في كي-هاوس 71",
        title: "العيش المثالي في وسط المدينة",
        desc: "كي-هاوس سوخومفيت 71 هي شقق مخدومة فاخرة مصممة بنمط كوندومينيوم حديث. نختار مواد من الدرجة الأولى لخدمة الجيل الجديد والعاملين الذين يبحثون عن الهدوء والخصوصية.",
        points: &[
            "بالقرب من محطة بي تي إس فرا خانونغ (خدمة تاكسي دراجات نارية على مدار 24 ساعة)",
            "بالقرب من طريق تشالونج رات السريع (سهولة الوصول إلى المدينة)",
            "بالقرب من مدارس بانكوك بريب وسانت أندروز الدولية",
            "جنة عشاق الطعام! بالقرب من ماكس فالو، لوتس وأشهر مأكولات الشارع (بريدي بانوميونغ 2)",
            "طرق وصول متعددة (سوخومفيت 71، خلونج تان، فيتشابوري)",
        ],
        location_card: LocationCard {
            label: "موقع متميز",
            value: "بالقرب من الطريق السريع والمدارس الدولية",
        },
    },
    facilities: FacilitiesText {
        title: "المرافق",
        subtitle: "متكاملة بجميع الوظائف لجعل إقامتك مريحة قدر الإمكان.",
        items: &[
            FacilityItem { name: "واي فاي سريع مجاني" },
            FacilityItem { name: "كاميرات مراقبة وأمن 24 ساعة" },
            FacilityItem { name: "مواقف سيارات داخلية" },
            FacilityItem { name: "دخول بالبطاقة الذكية" },
            FacilityItem { name: "منطقة اللوبي" },
            FacilityItem { name: "مصعد" },
        ],
    },
    rooms: RoomsText {
        title: "أنواع الغرف والأسعار",
        subtitle: "HOT PROMOTION! خصم خاص للعقود.",
        disclaimer: "*** الأسعار قابلة للتغيير.",
        price_start: "يبدأ العرض من",
        unit: "بات/شهر",
        unit_label: "الوحدة: بات (Baht)",
        table_headers: &["نوع الغرفة", "عقد سنة", "عقد 6 أشهر", "عقد 3 أشهر"],
        extra_charges: "رسوم إضافية",
        tv: "تلفزيون 500 بات",
        fridge: "ثلاجة 500 بات",
        cc: "نقبل بطاقات الائتمان",
        view_photos: "عرض الصور",
        ai_help_btn: "مساعد AI لاختيار الغرفة",
        types: &[
            RoomType {
                title: "استوديو أ (شرفة كبيرة)",
                features: &["شرفة كبيرة", "أثاث مدمج", "تكييف"],
            },
            RoomType {
                title: "استوديو ب (شرفة صغيرة)",
                features: &["شرفة صغيرة", "سرير كبير", "تكييف"],
            },
            RoomType {
                title: "جناح الزاوية (أمامي/خلفي)",
                features: &["1 غرفة نوم", "إطلالة زاوية", "52 - 56 م2"],
            },
            RoomType {
                title: "جناح 1 غرفة نوم الزاوية",
                features: &["جناح 1 غرفة", "واسعة", "52 - 54 م2"],
            },
        ],
    },
    contact: ContactText {
        title: "اتصل بنا",
        desc: "مفتوح على مدار 24 ساعة.",
        address_title: "العنوان",
        address_val: "54 Soi Pridi Banomyong 14, Sukhumvit 71 Rd, Watthana, Bangkok 10110",
        phone_title: "الهاتف",
        phone_display: "+66 88-524-5959",
        phone_action: "انقر للاتصال",
        email_title: "البريد الإلكتروني",
        email_val: "contact@k-house71.com",
        social_title: "فيسبوك",
        social_label: "K-House Apartment",
        map_btn: "عرض خرائط جوجل",
    },
    promotion: PromotionText {
        title: "عرض خاص! 🔥",
        detail: "خصم خاص لعقود 6 أشهر وسنة واحدة.",
        cta: "عرض الأسعار",
        limited: "بسرعة! الأماكن محدودة",
    },
    promotion_banner: PromotionBannerText {
        starting_from: "تبدأ من",
        unit_mo: "/شهر",
        contract_1yr: "عقد لمدة سنة",
    },
    room_matcher: RoomMatcherText {
        title: "مستشار الغرف الذكي ✨",
        subtitle: "لست متأكداً أي غرفة تختار؟ أخبرنا باحتياجاتك وسيقوم الذكاء الاصطناعي باقتراح الأفضل!",
        placeholder: "مثال: أحتاج غرفة هادئة لمدة 6 أشهر، ميزانية 7000 بات...",
        analyze_btn: "تحليل واقتراح",
        result_title: "توصية الذكاء الاصطناعي:",
    },
    chatbot: ChatbotText {
        open_btn: "تحدث معنا",
        title: "مساعد كي-هاوس",
        greeting: "مرحباً! اسألني عن الغرف أو الأسعار أو المنطقة المحيطة.",
        placeholder: "اكتب سؤالك...",
        send_btn: "إرسال",
        busy: "المساعد لا يزال يرد على رسالتك السابقة.",
    },
    reservation: ReservationText {
        open_btn: "احجز معاينة",
        title: "احجز غرفتك",
        subtitle: "اترك بياناتك وسيتواصل معك فريقنا للتأكيد.",
        name: "الاسم الكامل",
        email: "البريد الإلكتروني",
        phone: "الهاتف",
        room_type: "نوع الغرفة",
        move_in: "تاريخ الانتقال",
        contract: "مدة العقد",
        contract_options: &["سنة", "6 أشهر", "3 أشهر"],
        message: "رسالة (اختياري)",
        required_hint: "يرجى ملء هذا الحقل.",
        submit: "إرسال الحجز",
        submitting: "جارٍ الإرسال...",
        success_title: "شكراً لك!",
        success_detail: "لقد استلمنا طلبك وسنتواصل معك قريباً.",
        close: "إغلاق",
    },
    footer: FooterText {
        rights: "كي-هاوس سوخومفيت 71. جميع الحقوق محفوظة.",
    },
};
