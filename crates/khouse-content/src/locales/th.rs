//! Thai content.

use crate::tree::*;

pub static CONTENT: ContentTree = ContentTree {
    label: "ไทย",
    nav: NavText {
        home: "หน้าแรก",
        about: "เกี่ยวกับเรา",
        rooms: "ห้องพัก & ราคา",
        facilities: "สิ่งอำนวยความสะดวก",
        contact: "ติดต่อเรา",
    },
    hero: HeroText {
        location_badge: "สุขุมวิท 71 • ปรีดีพนมยงค์ 14",
        title: "อพาร์ทเมนท์หรู สไตล์คอนโดมิเนียม",
        subtitle: "สัมผัสชีวิตคนเมืองที่ลงตัว เงียบสงบ ร่มรื่น ใกล้ BTS พระโขนง เดินทางสะดวก พร้อมสิ่งอำนวยความสะดวกครบครัน",
        cta_rooms: "ดูห้องพักราคาพิเศษ",
        cta_contact: "ติดต่อสอบถาม",
    },
    about: AboutText {
        welcome: "ยินดีต้อนรับสู่ K-House 71",
        title: "ความลงตัวของการอยู่อาศัย ใจกลางเมือง",
        desc: "K-House Sukhumvit 71 อพาร์ทเมนท์เซอร์วิสหรู ตกแต่งด้วยเฟอร์นิเจอร์สไตล์โมเดิร์น-คอนโด เน้นความโปร่งโล่งสบาย เราคัดสรรวัสดุคุณภาพเกรด A เพื่อให้บริการแก่คนรุ่นใหม่และวัยทำงานที่ต้องการความสงบ",
        points: &[
            "ใกล้ BTS พระโขนง (มีวินมอเตอร์ไซค์บริการ 24 ชม.)",
            "ใกล้ทางด่วนฉลองรัช (รามอินทรา-อาจณรงค์) เดินทางสะดวก",
            "ใกล้โรงเรียนนานาชาติ Bangkok Prep และ St. Andrews",
            "หาของกินง่าย! ใกล้ MaxValu, Lotus และ Street Food เจ้าดัง (ปรีดีพนมยงค์ 2)",
            "เข้า-ออกได้หลายทาง (สุขุมวิท 71, คลองตัน, เพชรบุรี)",
        ],
        location_card: LocationCard {
            label: "ทำเลศักยภาพ",
            value: "ใกล้ทางด่วน & Street Food",
        },
    },
    facilities: FacilitiesText {
        title: "สิ่งอำนวยความสะดวก",
        subtitle: "ครบครันด้วยฟังก์ชันการใช้งาน เพื่อให้การพักอาศัยของคุณสะดวกสบายที่สุด",
        items: &[
            FacilityItem { name: "Free High-Speed WiFi" },
            FacilityItem { name: "CCTV & รปภ. 24 ชม." },
            FacilityItem { name: "ที่จอดรถในร่ม" },
            FacilityItem { name: "เข้า-ออกด้วย Key Card" },
            FacilityItem { name: "ล็อบบี้รับแขก" },
            FacilityItem { name: "ลิฟต์โดยสาร" },
        ],
    },
    rooms: RoomsText {
        title: "รูปแบบห้องพัก & อัตราค่าเช่า",
        subtitle: "HOT PROMOTION! โปรโมชั่นลดราคาพิเศษสำหรับทุกสัญญาเช่า",
        disclaimer: "*** ราคาอาจมีการเปลี่ยนแปลงโดยไม่ต้องแจ้งให้ทราบล่วงหน้า",
        price_start: "โปรโมชั่นเริ่มต้น",
        unit: "บาท/เดือน",
        unit_label: "หน่วย: บาท (Baht)",
        table_headers: &[
            "ประเภทห้อง (Room Type)",
            "สัญญา 1 ปี (1 Year)",
            "สัญญา 6 เดือน (6 Months)",
            "สัญญา 3 เดือน (3 Months)",
        ],
        extra_charges: "ค่าใช้จ่ายเพิ่มเติม (Extra Charges)",
        tv: "โทรทัศน์ (Television) 500 บาท/เดือน",
        fridge: "ตู้เย็น (Refrigerator) 500 บาท/เดือน",
        cc: "ยินดีรับบัตรเครดิต (We accept major Credit Cards)",
        view_photos: "ดูรูปภาพเพิ่มเติม",
        ai_help_btn: "ให้ AI ช่วยเลือกห้อง",
        types: &[
            RoomType {
                title: "Studio A (Big Balcony)",
                features: &["ระเบียงกว้าง", "เฟอร์นิเจอร์ Built-in", "แอร์ & น้ำอุ่น"],
            },
            RoomType {
                title: "Studio B (Small Balcony)",
                features: &["ระเบียงมาตรฐาน", "เตียง 6 ฟุต", "แอร์ & น้ำอุ่น"],
            },
            RoomType {
                title: "Sweet Corner (Front/Back)",
                features: &["1 ห้องนอน 1 ห้องนั่งเล่น", "มุมห้องวิวสวย", "52 - 56 ตร.ม."],
            },
            RoomType {
                title: "Suite 1 Bedroom Corner",
                features: &["ห้องสวีท 1 ห้องนอน", "พื้นที่กว้างขวาง", "52 - 54 ตร.ม."],
            },
        ],
    },
    contact: ContactText {
        title: "ติดต่อเรา",
        desc: "สนใจเข้าชมห้องพัก หรือสอบถามข้อมูลเพิ่มเติม สามารถติดต่อเราได้ตามช่องทางด้านล่าง เปิดทำการตลอดเวลา",
        address_title: "ที่อยู่",
        address_val: "54 ซอยปรีดีพนมยงค์ 14 แยก 4 ถ.สุขุมวิท 71 แขวงพระโขนงเหนือ เขตวัฒนา กรุงเทพฯ 10110",
        phone_title: "โทรศัพท์",
        phone_display: "088-524-5959",
        phone_action: "กดเพื่อโทรออก",
        email_title: "อีเมล",
        email_val: "contact@k-house71.com",
        social_title: "Facebook",
        social_label: "K-House Apartment",
        map_btn: "ดูแผนที่ Google Maps",
    },
    promotion: PromotionText {
        title: "โปรโมชั่นพิเศษ! 🔥",
        detail: "ส่วนลดพิเศษสำหรับสัญญาเช่า 6 เดือน และ 1 ปี",
        cta: "ดูราคาและจองเลย",
        limited: "ด่วน! ห้องมีจำนวนจำกัด",
    },
    promotion_banner: PromotionBannerText {
        starting_from: "เริ่มต้นเพียง",
        unit_mo: "/เดือน",
        contract_1yr: "สัญญา 1 ปี",
    },
    room_matcher: RoomMatcherText {
        title: "AI Room Matcher ✨",
        subtitle: "ไม่แน่ใจว่าจะเลือกห้องไหน? บอกความต้องการของคุณ แล้วให้ AI แนะนำให้สิครับ!",
        placeholder: "เช่น: อยากได้ห้องเงียบๆ งบประมาณ 7,000 บาท อยู่ประมาณ 6 เดือน...",
        analyze_btn: "วิเคราะห์หาห้องที่ใช่",
        result_title: "ห้องที่แนะนำสำหรับคุณ:",
    },
    chatbot: ChatbotText {
        open_btn: "แชทกับเรา",
        title: "ผู้ช่วย K-House",
        greeting: "สวัสดีครับ! สอบถามเรื่องห้องพัก ราคา หรือการเดินทางได้เลยครับ",
        placeholder: "พิมพ์คำถามของคุณ...",
        send_btn: "ส่ง",
        busy: "ผู้ช่วยกำลังตอบข้อความก่อนหน้าของคุณอยู่",
    },
    reservation: ReservationText {
        open_btn: "จองเข้าชมห้อง",
        title: "จองห้องพัก",
        subtitle: "กรอกข้อมูลของคุณ แล้วทีมงานจะติดต่อกลับเพื่อยืนยัน",
        name: "ชื่อ-นามสกุล",
        email: "อีเมล",
        phone: "เบอร์โทรศัพท์",
        room_type: "ประเภทห้อง",
        move_in: "วันที่ต้องการเข้าพัก",
        contract: "ระยะเวลาสัญญา",
        contract_options: &["1 ปี", "6 เดือน", "3 เดือน"],
        message: "ข้อความเพิ่มเติม (ไม่บังคับ)",
        required_hint: "กรุณากรอกข้อมูลในช่องนี้",
        submit: "ส่งคำขอจอง",
        submitting: "กำลังส่ง...",
        success_title: "ขอบคุณครับ!",
        success_detail: "เราได้รับคำขอของคุณแล้ว และจะติดต่อกลับโดยเร็วที่สุด",
        close: "ปิด",
    },
    footer: FooterText {
        rights: "K-House Sukhumvit 71. สงวนลิขสิทธิ์.",
    },
};
