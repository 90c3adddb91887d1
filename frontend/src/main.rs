use std::rc::Rc;
use std::time::Duration;

use zoon::{println, *};
use zoon::{map_ref, Rgba};

use motion::{Easing, EnterTween, MountSequence, VisualState};
use page::content;
use page::{ActiveNav, NavItem, NAV_ITEMS};

mod enter;

const APP_BACKGROUND_GRADIENT: &str =
    "linear-gradient(165deg, #0b0b0e 0%, #121218 55%, #18161f 100%)";

// The two fixed shapes behind the page: a large circle on the lower left
// and a sweeping quadratic curve on the right, both faint white strokes.
const DECORATIVE_CURVES_SVG: &str = "data:image/svg+xml;utf8,%3Csvg%20xmlns%3D%22http%3A//www.w3.org/2000/svg%22%20viewBox%3D%220%200%201200%20800%22%20preserveAspectRatio%3D%22none%22%20fill%3D%22none%22%3E%3Ccircle%20cx%3D%22100%22%20cy%3D%22650%22%20r%3D%22288%22%20stroke%3D%22white%22%20stroke-width%3D%221.5%22%20stroke-opacity%3D%220.3%22/%3E%3Cpath%20d%3D%22M%20600%200%20Q%20900%20400%20800%20800%22%20stroke%3D%22white%22%20stroke-width%3D%221.5%22%20stroke-opacity%3D%220.3%22/%3E%3C/svg%3E";

const SQUARE_GLYPH_SVG: &str = "data:image/svg+xml;utf8,%3Csvg%20xmlns%3D%22http%3A//www.w3.org/2000/svg%22%20width%3D%2212%22%20height%3D%2212%22%20viewBox%3D%220%200%2024%2024%22%3E%3Crect%20x%3D%223%22%20y%3D%223%22%20width%3D%2218%22%20height%3D%2218%22%20rx%3D%222%22%20fill%3D%22%23f4f3ef%22/%3E%3C/svg%3E";

const EMAIL_ARROW_SVG: &str = "data:image/svg+xml;utf8,%3Csvg%20xmlns%3D%22http%3A//www.w3.org/2000/svg%22%20width%3D%2216%22%20height%3D%2216%22%20viewBox%3D%220%200%2024%2024%22%20fill%3D%22none%22%20stroke%3D%22%23f4f3ef%22%20stroke-width%3D%222%22%20stroke-linecap%3D%22round%22%20stroke-linejoin%3D%22round%22%3E%3Cline%20x1%3D%227%22%20y1%3D%2217%22%20x2%3D%2217%22%20y2%3D%227%22/%3E%3Cpolyline%20points%3D%227%207%2017%207%2017%2017%22/%3E%3C/svg%3E";

const NOISE_OVERLAY_BACKGROUND: &str = "url('data:image/svg+xml;utf8,%3Csvg%20xmlns%3D%22http%3A//www.w3.org/2000/svg%22%20width%3D%22160%22%20height%3D%22160%22%3E%3Cfilter%20id%3D%22n%22%3E%3CfeTurbulence%20type%3D%22fractalNoise%22%20baseFrequency%3D%220.9%22%20numOctaves%3D%222%22%20stitchTiles%3D%22stitch%22/%3E%3C/filter%3E%3Crect%20width%3D%22160%22%20height%3D%22160%22%20filter%3D%22url(%23n)%22%20opacity%3D%220.05%22/%3E%3C/svg%3E')";

// Enter animation groups. Each name must match a group registered in
// `enter_sequence`.
const GROUP_HEADER: &str = "header";
const GROUP_NAV_ENTRIES: &str = "nav-entries";
const GROUP_HERO: &str = "hero";
const GROUP_HERO_FOOTER: &str = "hero-footer";
const GROUP_CONTACT_INFO: &str = "contact-info";

const ENTER_EASE: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);
const NAV_ENTER_STAGGER: Duration = Duration::from_millis(90);

fn primary_text_color() -> Rgba {
    color!("#f4f3ef")
}

fn muted_text_color() -> Rgba {
    color!("rgba(244, 243, 239, 0.62)")
}

fn faint_line_color() -> Rgba {
    color!("rgba(244, 243, 239, 0.35)")
}

fn main() {
    start_app("app", Portfolio::new);
}

#[derive(Clone)]
struct Portfolio {
    /// The single piece of page state: which navigation entry is selected.
    active_nav: Mutable<ActiveNav>,
    /// Enter schedule, consulted while elements are constructed.
    sequence: Rc<MountSequence>,
    _settle_log_task: Rc<TaskHandle>,
}

impl Portfolio {
    fn new() -> impl Element {
        let sequence = Rc::new(enter_sequence());

        let _settle_log_task = Rc::new(Task::start_droppable({
            let settle = sequence.settle_duration();
            async move {
                Timer::sleep(settle.as_millis() as u32).await;
                println!("Enter animations settled after {}ms", settle.as_millis());
            }
        }));

        Self {
            active_nav: Mutable::new(ActiveNav::initial()),
            sequence,
            _settle_log_task,
        }
        .root()
    }

    fn root(&self) -> impl Element + use<> {
        let this = self.clone();
        Stack::new()
            .s(Width::fill())
            .s(Height::fill())
            .layer(
                El::new()
                    .s(Width::fill())
                    .s(Height::fill())
                    .update_raw_el(|raw_el| raw_el.style("background", APP_BACKGROUND_GRADIENT)),
            )
            .layer(self.decorative_curves())
            .layer(self.main_layout())
            .layer(self.noise_overlay())
            // Keep the struct alive for the lifetime of the page; dropping
            // the last `Rc<TaskHandle>` aborts the pending settle log.
            .after_remove(move |_| drop(this))
    }

    fn decorative_curves(&self) -> impl Element + use<> {
        El::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(Background::new().url(DECORATIVE_CURVES_SVG))
            .pointer_handling(PointerHandling::none())
            .update_raw_el(|raw_el| {
                raw_el
                    .style("background-size", "100% 100%")
                    .style("background-repeat", "no-repeat")
            })
    }

    fn noise_overlay(&self) -> impl Element + use<> {
        El::new()
            .s(Width::fill())
            .s(Height::fill())
            .pointer_handling(PointerHandling::none())
            .update_raw_el(|raw_el| raw_el.style("background-image", NOISE_OVERLAY_BACKGROUND))
    }

    fn main_layout(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(Padding::new().x(40).top(28).bottom(36))
            .s(Gap::new().y(24))
            .s(Font::new().color(primary_text_color()).family([
                FontFamily::new("Inter"),
                FontFamily::new("Helvetica Neue"),
                FontFamily::SansSerif,
            ]))
            .s(Scrollbars::both())
            .item(enter::animated_block(
                self.sequence.tween(GROUP_HEADER),
                self.header(),
            ))
            .item(self.hero())
    }

    fn header(&self) -> impl Element + use<> {
        Row::new()
            .s(Width::fill())
            .s(Align::new().center_y())
            .s(Gap::new().x(16).y(10))
            .multiline()
            .item(El::new().s(Align::new().left()).child(self.logo()))
            .item(El::new().s(Align::new().right()).child(self.nav()))
    }

    fn logo(&self) -> impl Element + use<> {
        El::new()
            .s(Font::new().size(17).weight(FontWeight::SemiBold).no_wrap())
            .child(content::LOGO)
    }

    fn nav(&self) -> impl Element + use<> {
        let entries: Vec<_> = NAV_ITEMS
            .iter()
            .copied()
            .enumerate()
            .map(|(index, item)| self.nav_entry(index, item))
            .collect();
        Row::new()
            .s(Align::new().center_y())
            .s(Gap::new().x(26).y(8))
            .multiline()
            .items(entries)
    }

    /// One navigation entry: a dot marker plus the label, linking to the
    /// entry's anchor. Clicking it moves the active selection; the anchor
    /// navigation itself is left to the browser.
    fn nav_entry(&self, index: usize, item: NavItem) -> impl Element {
        let tween = self.sequence.child_tween(GROUP_NAV_ENTRIES, index);
        let hovered = Mutable::new(false);
        let hovered_signal = hovered.signal().broadcast();
        let is_active_signal = self
            .active_nav
            .signal()
            .map(move |active| active.is_selected(item.id))
            .broadcast();

        enter::animated_item(
            tween,
            Link::new()
                .s(Font::new().size(15).weight(FontWeight::Medium).no_wrap())
                .s(Font::new().color_signal(map_ref! {
                    let hovered = hovered_signal.signal(),
                    let is_active = is_active_signal.signal() =>
                    if *is_active {
                        primary_text_color()
                    } else if *hovered {
                        color!("rgba(244, 243, 239, 0.85)")
                    } else {
                        muted_text_color()
                    }
                }))
                .label(
                    Row::new()
                        .s(Align::new().center_y())
                        .s(Gap::new().x(8))
                        .item(
                            El::new()
                                .s(Width::exact(6))
                                .s(Height::exact(6))
                                .s(RoundedCorners::all(999))
                                .s(Background::new().color_signal(map_ref! {
                                    let hovered = hovered_signal.signal(),
                                    let is_active = is_active_signal.signal() =>
                                    match (*is_active, *hovered) {
                                        (true, _) => color!("#f4f3ef"),
                                        (false, true) => color!("rgba(244, 243, 239, 0.45)"),
                                        (false, false) => color!("rgba(244, 243, 239, 0)"),
                                    }
                                })),
                        )
                        .item(Text::new(item.label)),
                )
                .to(item.anchor)
                .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
                .update_raw_el({
                    let active_nav = self.active_nav.clone();
                    move |raw_el| {
                        raw_el.event_handler(move |_: events::Click| {
                            let mut active = *active_nav.lock_ref();
                            active.select(item.id);
                            active_nav.set_neq(active);
                        })
                    }
                }),
        )
    }

    fn hero(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(Gap::new().y(24))
            .item(El::new().s(Height::fill()))
            .item(enter::animated_block(
                self.sequence.tween(GROUP_HERO),
                self.hero_content(),
            ))
            .item(El::new().s(Height::fill()))
            .item(enter::animated_block(
                self.sequence.tween(GROUP_HERO_FOOTER),
                self.hero_footer(),
            ))
    }

    fn hero_content(&self) -> impl Element + use<> {
        Row::new()
            .s(Width::fill().max(720))
            .s(Align::new().left())
            .s(Gap::new().x(16))
            .item(
                El::new()
                    .s(Align::new().top())
                    .s(Padding::new().top(14))
                    .child(self.square_glyph()),
            )
            .item(
                El::new()
                    .s(Font::new().size(30).color(primary_text_color()))
                    .update_raw_el(|raw_el| raw_el.style("line-height", "1.4"))
                    .child(content::INTRO),
            )
    }

    fn hero_footer(&self) -> impl Element + use<> {
        Row::new()
            .s(Width::fill())
            .s(Gap::new().x(24).y(18))
            .multiline()
            .item(
                El::new()
                    .s(Align::new().left().bottom())
                    .child(self.location_line()),
            )
            .item(El::new().s(Align::new().right()).child(self.footer_right()))
    }

    fn location_line(&self) -> impl Element + use<> {
        Row::new()
            .s(Align::new().center_y())
            .s(Gap::new().x(10))
            .s(Font::new().size(14).color(muted_text_color()))
            .item(self.square_glyph())
            .item(Text::new(content::LOCATION))
    }

    fn footer_right(&self) -> impl Element + use<> {
        Column::new()
            .s(Gap::new().y(14))
            .item(self.cta_buttons())
            .item(enter::animated_block(
                self.sequence.tween(GROUP_CONTACT_INFO),
                self.contact_info(),
            ))
    }

    fn cta_buttons(&self) -> impl Element + use<> {
        Row::new()
            .s(Align::new().right().center_y())
            .s(Gap::new().x(10))
            .item(self.contact_button())
            .item(self.resume_link())
    }

    fn contact_button(&self) -> impl Element {
        let hovered = Mutable::new(false);
        Button::new()
            .s(Padding::new().x(22).y(10))
            .s(RoundedCorners::all(999))
            .s(Font::new()
                .size(14)
                .weight(FontWeight::Medium)
                .color(color!("#101014"))
                .no_wrap())
            .s(Background::new().color_signal(
                hovered
                    .signal()
                    .map_bool(|| color!("#ffffff"), || color!("#f4f3ef")),
            ))
            .label(El::new().child(content::CONTACT_LABEL))
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
    }

    /// Round download control for the resume, labeled with a down arrow.
    /// The `download` attribute makes the browser save the file instead of
    /// navigating to it.
    fn resume_link(&self) -> impl Element {
        let hovered = Mutable::new(false);
        Link::new()
            .s(Width::exact(40))
            .s(Height::exact(40))
            .s(RoundedCorners::all(999))
            .s(Borders::all(Border::new().color(faint_line_color()).width(1)))
            .s(Background::new().color_signal(hovered.signal().map_bool(
                || color!("rgba(244, 243, 239, 0.14)"),
                || color!("rgba(244, 243, 239, 0)"),
            )))
            .s(Font::new().size(16).color(primary_text_color()))
            .label(
                El::new()
                    .s(Align::center())
                    .child(content::RESUME_LINK_LABEL),
            )
            .to(content::RESUME_PATH)
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("download", "")
                    .attr("title", content::RESUME_LINK_TITLE)
            })
    }

    fn contact_info(&self) -> impl Element + use<> {
        El::new().s(Align::new().right()).child(self.email_link())
    }

    fn email_link(&self) -> impl Element {
        let hovered = Mutable::new(false);
        Link::new()
            .s(Font::new()
                .size(14)
                .color_signal(
                    hovered
                        .signal()
                        .map_bool(primary_text_color, muted_text_color),
                )
                .line(FontLine::new().underline().offset(4)))
            .label(
                Row::new()
                    .s(Align::new().center_y())
                    .s(Gap::new().x(6))
                    .item(Text::new(content::EMAIL_ADDRESS))
                    .item(self.email_arrow_glyph()),
            )
            .to(content::mailto_href())
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
    }

    fn square_glyph(&self) -> impl Element {
        El::new()
            .s(Width::exact(12))
            .s(Height::exact(12))
            .s(Background::new().url(SQUARE_GLYPH_SVG))
    }

    fn email_arrow_glyph(&self) -> impl Element {
        El::new()
            .s(Width::exact(16))
            .s(Height::exact(16))
            .s(Background::new().url(EMAIL_ARROW_SVG))
    }
}

/// The page's enter schedule: the header drops in first while the
/// navigation entries follow one by one, then the hero copy and the footer
/// blocks rise into place.
fn enter_sequence() -> MountSequence {
    MountSequence::new()
        .group(
            GROUP_HEADER,
            EnterTween::new(VisualState::hidden(0.0, -16.0), ms(600)).easing(ENTER_EASE),
        )
        .staggered_group(
            GROUP_NAV_ENTRIES,
            EnterTween::new(VisualState::hidden(0.0, -10.0), ms(450))
                .delay(ms(150))
                .easing(ENTER_EASE),
            NAV_ENTER_STAGGER,
            NAV_ITEMS.len(),
        )
        .group(
            GROUP_HERO,
            EnterTween::new(VisualState::hidden(0.0, 28.0), ms(700))
                .delay(ms(250))
                .easing(ENTER_EASE),
        )
        .group(
            GROUP_HERO_FOOTER,
            EnterTween::new(VisualState::hidden(0.0, 20.0), ms(600))
                .delay(ms(450))
                .easing(ENTER_EASE),
        )
        .group(
            GROUP_CONTACT_INFO,
            EnterTween::new(VisualState::hidden(0.0, 12.0), ms(500))
                .delay(ms(600))
                .easing(ENTER_EASE),
        )
}

const fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}
