//! Japanese content.

use crate::tree::*;

pub static CONTENT: ContentTree = ContentTree {
    label: "日本語",
    nav: NavText {
        home: "ホーム",
        about: "当アパートについて",
        rooms: "客室と料金",
        facilities: "施設・設備",
        contact: "お問い合わせ",
    },
    hero: HeroText {
        location_badge: "スクンビット71 • プリディ・パノムヨン14",
        title: "コンドミニアムスタイルの高級アパートメント",
        subtitle: "都会の完璧な生活を体験してください。静かでプライベート、そして緑豊か。BTSプラカノン駅に近く、設備も充実しています。",
        cta_rooms: "特別価格の部屋を見る",
        cta_contact: "お問い合わせ",
    },
    about: AboutText {
        welcome: "K-House 71へようこそ",
        title: "都心の完璧な住まい",
        desc: "K-House Sukhumvit 71は、モダンなコンドミニアムスタイルで装飾された高級サービスアパートメントです。静けさとプライバシーを求める新世代や社会人のために、グレードAの素材を厳選しました。",
        points: &[
            "BTSプラカノン駅近く (24時間バイクタクシーあり)",
            "チャロンラット高速道路近く (市内へのアクセス便利)",
            "バンコク・プレップ ＆ セント・アンドリュース・インターナショナル・スクール近く",
            "食事に便利！マックスバリュ、ロータス、有名なストリートフード（プリディ・パノムヨン2）近く",
            "多方面からのアクセス可能 (スクンビット71, クロンタン, ペチャブリー)",
        ],
        location_card: LocationCard {
            label: "好立地",
            value: "高速道路 & ストリートフード近く",
        },
    },
    facilities: FacilitiesText {
        title: "施設・設備",
        subtitle: "快適な滞在のために、充実した機能を完備しています。",
        items: &[
            FacilityItem { name: "無料高速Wi-Fi" },
            FacilityItem { name: "CCTV & 24時間警備" },
            FacilityItem { name: "屋内駐車場" },
            FacilityItem { name: "キーカード入退室" },
            FacilityItem { name: "ロビーエリア" },
            FacilityItem { name: "エレベーター" },
        ],
    },
    rooms: RoomsText {
        title: "部屋タイプと料金",
        subtitle: "HOT PROMOTION! 短期・長期契約向けの特別割引あり。",
        disclaimer: "*** 価格は予告なく変更される場合があります。",
        price_start: "プロモーション価格",
        unit: "バーツ/月",
        unit_label: "単位：バーツ (Baht)",
        table_headers: &["部屋タイプ", "1年契約", "6ヶ月契約", "3ヶ月契約"],
        extra_charges: "追加料金",
        tv: "テレビ 500バーツ/月",
        fridge: "冷蔵庫 500バーツ/月",
        cc: "主要なクレジットカードをご利用いただけます",
        view_photos: "写真を見る",
        ai_help_btn: "AIで部屋を選ぶ",
        types: &[
            RoomType {
                title: "スタジオ A (大きなバルコニー)",
                features: &["広いバルコニー", "作り付け家具", "エアコン完備"],
            },
            RoomType {
                title: "スタジオ B (スモールバルコニー)",
                features: &["スモールバルコニー", "キングサイズベッド", "エアコン完備"],
            },
            RoomType {
                title: "スイートコーナー (フロント/バック)",
                features: &["1ベッドルーム 1リビング", "角部屋 (眺望良)", "52 - 56 sq.m."],
            },
            RoomType {
                title: "スイート 1ベッドルーム コーナー",
                features: &["1ベッドルームスイート", "広々とした空間", "52 - 54 sq.m."],
            },
        ],
    },
    contact: ContactText {
        title: "お問い合わせ",
        desc: "見学ご希望や詳細については、以下のチャンネルからお問い合わせください。24時間営業。",
        address_title: "住所",
        address_val: "54 Soi Pridi Banomyong 14, Sukhumvit 71 Rd, Phra Khanong Nuea, Watthana, Bangkok 10110",
        phone_title: "電話",
        phone_display: "+66 88-524-5959",
        phone_action: "タップして発信",
        email_title: "メール",
        email_val: "contact@k-house71.com",
        social_title: "Facebook",
        social_label: "K-House Apartment",
        map_btn: "Googleマップを見る",
    },
    promotion: PromotionText {
        title: "特別プロモーション！ 🔥",
        detail: "6ヶ月および1年契約の特別割引。",
        cta: "料金を見る",
        limited: "お早めに！空室わずか",
    },
    promotion_banner: PromotionBannerText {
        starting_from: "最低価格",
        unit_mo: "/月",
        contract_1yr: "1年契約",
    },
    room_matcher: RoomMatcherText {
        title: "AIルームマッチャー ✨",
        subtitle: "どの部屋がいいか迷っていますか？AIがあなたにぴったりの部屋を提案します！",
        placeholder: "例：静かな部屋、予算7,000バーツ、6ヶ月滞在...",
        analyze_btn: "部屋を探す",
        result_title: "AIのおすすめ：",
    },
    chatbot: ChatbotText {
        open_btn: "チャットで相談",
        title: "K-House アシスタント",
        greeting: "こんにちは！お部屋、料金、周辺環境について何でもお尋ねください。",
        placeholder: "ご質問を入力してください...",
        send_btn: "送信",
        busy: "前のメッセージに回答中です。",
    },
    reservation: ReservationText {
        open_btn: "内見を予約",
        title: "お部屋の予約",
        subtitle: "ご連絡先をご記入ください。担当者より確認のご連絡をいたします。",
        name: "お名前",
        email: "メール",
        phone: "電話番号",
        room_type: "部屋タイプ",
        move_in: "入居希望日",
        contract: "契約期間",
        contract_options: &["1年", "6ヶ月", "3ヶ月"],
        message: "メッセージ (任意)",
        required_hint: "この項目を入力してください。",
        submit: "予約を送信",
        submitting: "送信中...",
        success_title: "ありがとうございます！",
        success_detail: "ご依頼を受け付けました。担当者より折り返しご連絡いたします。",
        close: "閉じる",
    },
    footer: FooterText {
        rights: "K-House Sukhumvit 71. All rights reserved.",
    },
};
