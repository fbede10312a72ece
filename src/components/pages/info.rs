//! Help, terms and privacy screens.

use kualala_core::catalog::Faq;
use kualala_core::AuthError;
use kualala_core::services::is_email_valid;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::premium::FaqList;
use crate::components::cards::PageHeader;
use crate::components::icons as ic;
use crate::config::{LEGAL_EMAIL, PRIVACY_EMAIL, SETTINGS_DEMO_NOTICE, SUPPORT_EMAIL};
use crate::utils::dom;

stylance::import_crate_style!(page, "src/components/pages/pages.module.css");

const LAST_UPDATED: &str = "Terakhir diperbarui: 21 November 2025";

const HELP_FAQS: &[(&str, &str)] = &[
    (
        "Apa itu Kualala?",
        "Kualala adalah platform ringkasan buku berbahasa Indonesia yang membantu kamu memahami isi buku terbaik dunia dalam waktu 10-15 menit.",
    ),
    (
        "Apakah ringkasan Kualala akurat?",
        "Ya! Setiap ringkasan dibuat oleh tim kami yang membaca buku secara menyeluruh dan mengekstrak poin-poin penting dengan teliti.",
    ),
    (
        "Berapa banyak buku yang tersedia?",
        "Saat ini kami memiliki 1000+ ringkasan buku dari berbagai kategori, dan terus bertambah setiap minggu.",
    ),
    (
        "Apakah ada versi gratisnya?",
        "Ya! Kamu bisa akses 10 ringkasan per bulan secara gratis. Untuk akses unlimited, upgrade ke Premium.",
    ),
    (
        "Bagaimana cara request buku?",
        "Kamu bisa kirim request melalui form kontak di bawah atau email ke tim support kami.",
    ),
    (
        "Apakah saya bisa cancel langganan kapan saja?",
        "Ya, kamu bisa cancel langganan kapan saja tanpa biaya tambahan. Akses premium akan tetap aktif sampai akhir periode langganan.",
    ),
    (
        "Apakah pembayaran aman?",
        "Sangat aman! Kami menggunakan sistem pembayaran terenkripsi dan tidak menyimpan data kartu kredit kamu.",
    ),
];

/// A numbered heading with its paragraphs.
struct LegalSection {
    title: &'static str,
    paragraphs: &'static [&'static str],
}

const TERMS: &[LegalSection] = &[
    LegalSection {
        title: "1. Penerimaan Ketentuan",
        paragraphs: &[
            "Selamat datang di Kualala! Dengan mengakses dan menggunakan layanan kami, kamu setuju untuk terikat oleh syarat dan ketentuan berikut. Jika kamu tidak setuju dengan ketentuan ini, mohon untuk tidak menggunakan layanan kami.",
            "Kualala adalah platform ringkasan buku berbahasa Indonesia yang menyediakan rangkuman berkualitas dari berbagai buku populer untuk membantu kamu belajar lebih efisien.",
        ],
    },
    LegalSection {
        title: "2. Langganan dan Pembayaran",
        paragraphs: &[
            "Kualala menawarkan paket gratis dan premium. Paket premium memberikan akses penuh ke semua ringkasan buku dan fitur eksklusif.",
            "Pembayaran dilakukan di muka untuk periode langganan yang dipilih. Harga dapat berubah sewaktu-waktu dengan pemberitahuan sebelumnya.",
            "Kamu dapat membatalkan langganan kapan saja. Pembatalan akan berlaku pada akhir periode langganan yang sedang berjalan.",
        ],
    },
    LegalSection {
        title: "3. Hak Kekayaan Intelektual",
        paragraphs: &[
            "Semua konten di Kualala, termasuk ringkasan buku, desain, logo, dan materi lainnya, dilindungi oleh hak cipta dan merupakan milik Kualala atau pemberi lisensi kami.",
        ],
    },
    LegalSection {
        title: "4. Disclaimer Konten",
        paragraphs: &[
            "Ringkasan buku di Kualala dibuat dengan itikad baik untuk memberikan inti sari dari buku-buku asli. Kami menyarankan untuk membaca buku lengkap untuk pemahaman yang lebih mendalam.",
        ],
    },
    LegalSection {
        title: "5. Perubahan Ketentuan",
        paragraphs: &[
            "Kami berhak untuk mengubah syarat dan ketentuan ini sewaktu-waktu. Perubahan akan diberitahukan melalui email atau notifikasi di platform.",
        ],
    },
];

const PRIVACY: &[LegalSection] = &[
    LegalSection {
        title: "1. Pendahuluan",
        paragraphs: &[
            "Di Kualala, kami sangat menghargai privasi kamu. Kebijakan Privasi ini menjelaskan bagaimana kami mengumpulkan, menggunakan, menyimpan, dan melindungi informasi pribadi kamu saat menggunakan layanan kami.",
        ],
    },
    LegalSection {
        title: "2. Informasi yang Kami Kumpulkan",
        paragraphs: &[
            "Ketika kamu mendaftar, kami menyimpan nama, alamat email, dan preferensi membaca kamu. Saat kamu menggunakan layanan, kami mencatat riwayat baca dan progres ringkasan.",
        ],
    },
    LegalSection {
        title: "3. Keamanan Data",
        paragraphs: &[
            "Kami mengimplementasikan berbagai langkah keamanan untuk melindungi informasi pribadi kamu. Namun tidak ada metode transmisi internet yang 100% aman.",
        ],
    },
    LegalSection {
        title: "4. Penyimpanan Data",
        paragraphs: &[
            "Kami menyimpan informasi pribadi kamu selama akun kamu aktif. Jika kamu menghapus akun, data kamu akan dihapus dalam waktu 90 hari.",
        ],
    },
    LegalSection {
        title: "5. Privasi Anak-Anak",
        paragraphs: &[
            "Layanan Kualala ditujukan untuk pengguna berusia 13 tahun ke atas.",
        ],
    },
];

#[derive(Clone, Default)]
struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactMessage {
    fn validate(&self) -> Result<(), AuthError> {
        if self.name.trim().is_empty() {
            return Err(AuthError::MissingField("name"));
        }
        if !is_email_valid(&self.email) {
            return Err(AuthError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(AuthError::MissingField("message"));
        }
        Ok(())
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let faqs = HELP_FAQS
        .iter()
        .map(|(q, a)| Faq {
            question: (*q).to_string(),
            answer: (*a).to_string(),
        })
        .collect::<Vec<_>>();

    view! {
        <div class=page::narrow>
            <PageHeader
                title="Help & Support"
                subtitle="Ada pertanyaan? Kami siap membantu kamu"
            />
            <ContactForm />
            <FaqList faqs=faqs />
            <p class=page::muted>
                "Atau email langsung ke: "
                <a href=format!("mailto:{SUPPORT_EMAIL}")>{SUPPORT_EMAIL}</a>
            </p>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactMessage::default());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(ContactMessage::validate) {
            Ok(()) => {
                set_error.set(None);
                form.set(ContactMessage::default());
                dom::alert(SETTINGS_DEMO_NOTICE);
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <section class=page::panel>
            <h2 class=page::sectionTitle><Icon icon=ic::MAIL />"Hubungi Kami"</h2>
            <p class=page::muted>
                "Punya pertanyaan, saran, atau feedback? Kami senang mendengar dari kamu!"
            </p>
            <form class=page::form on:submit=on_submit novalidate>
                {move || error.get().map(|msg| view! { <p class=page::error role="alert">{msg}</p> })}
                <label class=page::field>
                    <span class=page::label>"Nama"</span>
                    <input
                        class=page::input
                        placeholder="Nama kamu"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| f.name = v);
                        }
                    />
                </label>
                <label class=page::field>
                    <span class=page::label>"Email"</span>
                    <input
                        class=page::input
                        type="email"
                        placeholder="email@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| f.email = v);
                        }
                    />
                </label>
                <label class=page::field>
                    <span class=page::label>"Pesan"</span>
                    <textarea
                        class=page::input
                        rows="5"
                        placeholder="Tulis pesan kamu di sini..."
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| f.message = v);
                        }
                    ></textarea>
                </label>
                <button type="submit" class=page::primary>"Kirim Pesan"</button>
            </form>
        </section>
    }
}

/// Renders a legal document followed by its contact address.
#[component]
fn LegalDocument(
    title: &'static str,
    sections: &'static [LegalSection],
    contact: &'static str,
) -> impl IntoView {
    view! {
        <div class=page::narrow>
            <PageHeader title=title subtitle=LAST_UPDATED />
            <article class=page::prose>
                {sections
                    .iter()
                    .map(|section| {
                        view! {
                            <h2>{section.title}</h2>
                            {section.paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                        }
                    })
                    .collect_view()}
                <h2>"Hubungi Kami"</h2>
                <p>
                    "Jika kamu memiliki pertanyaan, silakan hubungi kami di "
                    <a href=format!("mailto:{contact}")>{contact}</a>
                </p>
            </article>
        </div>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalDocument title="Syarat dan Ketentuan" sections=TERMS contact=LEGAL_EMAIL /> }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <LegalDocument title="Kebijakan Privasi" sections=PRIVACY contact=PRIVACY_EMAIL /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.into(),
            email: email.into(),
            message: body.into(),
        }
    }

    #[test]
    fn test_contact_message_valid() {
        assert_eq!(message("Budi", "budi@mail.com", "Halo").validate(), Ok(()));
    }

    #[test]
    fn test_contact_message_requires_name() {
        assert_eq!(
            message("  ", "budi@mail.com", "Halo").validate(),
            Err(AuthError::MissingField("name"))
        );
    }

    #[test]
    fn test_contact_message_rejects_bad_email() {
        assert_eq!(
            message("Budi", "budi", "Halo").validate(),
            Err(AuthError::InvalidEmail)
        );
    }

    #[test]
    fn test_legal_documents_not_empty() {
        assert!(TERMS.iter().chain(PRIVACY).all(|s| !s.paragraphs.is_empty()));
    }
}
