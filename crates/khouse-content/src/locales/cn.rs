//! Chinese content.

use crate::tree::*;

pub static CONTENT: ContentTree = ContentTree {
    label: "中文",
    nav: NavText {
        home: "首页",
        about: "关于我们",
        rooms: "客房及价格",
        facilities: "设施",
        contact: "联系我们",
    },
    hero: HeroText {
        location_badge: "素坤逸 71 • 比迪·帕农荣 14",
        title: "豪华公寓式住宅",
        subtitle: "体验完美的城市生活。安静、私密且绿意盎然。靠近 BTS Phra Khanong，设施齐全。",
        cta_rooms: "查看特价客房",
        cta_contact: "联系我们",
    },
    about: AboutText {
        welcome: "欢迎来到 K-House 71",
        title: "市中心的完美居所",
        desc: "K-House Sukhumvit 71 是一家以现代公寓风格装饰的豪华服务式公寓。我们精选 A 级材料，为需要安静和隐私的新一代和上班族提供服务。",
        points: &[
            "靠近 BTS Phra Khanong (24小时摩托车出租服务)",
            "靠近 Chalong Rat 高速公路 (交通便利)",
            "靠近曼谷预科国际学校 (Bangkok Prep) 和圣安德鲁斯国际学校",
            "美食天堂！靠近 MaxValu, Lotus 和著名的街头美食区 (Pridi Banomyong 2)",
            "多条通道可达 (素坤逸 71, Khlong Tan, Phetchaburi)",
        ],
        location_card: LocationCard {
            label: "黄金地段",
            value: "靠近高速公路 & 街头美食",
        },
    },
    facilities: FacilitiesText {
        title: "设施",
        subtitle: "功能齐全，让您的住宿尽可能舒适。",
        items: &[
            FacilityItem { name: "免费高速 WiFi" },
            FacilityItem { name: "CCTV & 24小时保安" },
            FacilityItem { name: "室内停车场" },
            FacilityItem { name: "门禁卡出入" },
            FacilityItem { name: "大堂区" },
            FacilityItem { name: "电梯" },
        ],
    },
    rooms: RoomsText {
        title: "房型及价格",
        subtitle: "HOT PROMOTION! 长短期合约均享特别折扣。",
        disclaimer: "*** 价格可能会有所变动，请联系工作人员。",
        price_start: "促销起价",
        unit: "泰铢/月",
        unit_label: "单位：泰铢 (Baht)",
        table_headers: &["房型", "1年合约", "6个月合约", "3个月合约"],
        extra_charges: "额外费用",
        tv: "电视 500泰铢/月",
        fridge: "冰箱 500泰铢/月",
        cc: "我们接受主流信用卡",
        view_photos: "查看照片",
        ai_help_btn: "AI 帮我选房",
        types: &[
            RoomType {
                title: "单间公寓 A (大阳台)",
                features: &["大阳台", "内置家具", "空调和热水器"],
            },
            RoomType {
                title: "单间公寓 B (小阳台)",
                features: &["小阳台", "特大号床", "空调和热水器"],
            },
            RoomType {
                title: "套房角落 (前/后)",
                features: &["1卧1厅", "景观角落房", "52 - 56 平方米"],
            },
            RoomType {
                title: "单卧套房角落",
                features: &["单卧套房", "宽敞", "52 - 54 平方米"],
            },
        ],
    },
    contact: ContactText {
        title: "联系我们",
        desc: "有兴趣参观或需要更多信息？请通过以下渠道联系我们。每天24小时营业。",
        address_title: "地址",
        address_val: "54 Soi Pridi Banomyong 14, Sukhumvit 71 Rd, Phra Khanong Nuea, Watthana, Bangkok 10110",
        phone_title: "电话",
        phone_display: "+66 88-524-5959",
        phone_action: "点击拨打",
        email_title: "电子邮件",
        email_val: "contact@k-house71.com",
        social_title: "Facebook",
        social_label: "K-House Apartment",
        map_btn: "查看谷歌地图",
    },
    promotion: PromotionText {
        title: "特别促销！ 🔥",
        detail: "6个月和1年合约的特别折扣。",
        cta: "查看价格",
        limited: "数量有限，欲订从速！",
    },
    promotion_banner: PromotionBannerText {
        starting_from: "最低起价",
        unit_mo: "/月",
        contract_1yr: "1年合约",
    },
    room_matcher: RoomMatcherText {
        title: "AI 选房助手 ✨",
        subtitle: "不确定选哪个房间？告诉我们您的需求，让 AI 为您推荐！",
        placeholder: "例如：我需要一个安静的房间，预算 7,000 泰铢，住 6 个月...",
        analyze_btn: "开始分析",
        result_title: "AI 推荐：",
    },
    chatbot: ChatbotText {
        open_btn: "在线咨询",
        title: "K-House 助手",
        greeting: "您好！关于房间、价格或周边环境，欢迎随时提问。",
        placeholder: "请输入您的问题...",
        send_btn: "发送",
        busy: "助手仍在回复您的上一条消息。",
    },
    reservation: ReservationText {
        open_btn: "预约看房",
        title: "预订房间",
        subtitle: "请留下您的联系方式，我们的团队会与您联系确认。",
        name: "姓名",
        email: "电子邮件",
        phone: "电话",
        room_type: "房型",
        move_in: "入住日期",
        contract: "合约期限",
        contract_options: &["1年", "6个月", "3个月"],
        message: "留言（选填）",
        required_hint: "请填写此字段。",
        submit: "提交预订",
        submitting: "提交中...",
        success_title: "谢谢！",
        success_detail: "我们已收到您的请求，将尽快与您联系。",
        close: "关闭",
    },
    footer: FooterText {
        rights: "K-House Sukhumvit 71. 保留所有权利。",
    },
};
