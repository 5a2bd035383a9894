use smallvec::SmallVec;

const PROPERTY_COUNT: usize = 10;

/// Animatable style property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Opacity,
    X,
    Y,
    Scale,
    ScaleX,
    Rotate,
    RotateX,
    RotateY,
    WidthPx,
    StrokeDashoffset,
}

impl Property {
    pub const ALL: [Property; PROPERTY_COUNT] = [
        Property::Opacity,
        Property::X,
        Property::Y,
        Property::Scale,
        Property::ScaleX,
        Property::Rotate,
        Property::RotateX,
        Property::RotateY,
        Property::WidthPx,
        Property::StrokeDashoffset,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    /// Value the element has when the property is not animated.
    pub fn rest_value(self) -> f32 {
        match self {
            Property::Opacity | Property::Scale | Property::ScaleX => 1.0,
            _ => 0.0,
        }
    }

    pub fn is_transform(self) -> bool {
        !matches!(
            self,
            Property::Opacity | Property::WidthPx | Property::StrokeDashoffset
        )
    }
}

/// Sampled property values for one element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionStyle {
    values: [Option<f32>; PROPERTY_COUNT],
}

impl MotionStyle {
    pub fn set(&mut self, prop: Property, value: f32) {
        self.values[prop.index()] = Some(value);
    }

    pub fn get(&self, prop: Property) -> Option<f32> {
        self.values[prop.index()]
    }

    /// Animated value, or the property's rest value when unset.
    pub fn value(&self, prop: Property) -> f32 {
        self.get(prop).unwrap_or_else(|| prop.rest_value())
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// CSS `transform` for the transform properties that are set.
    pub fn transform_css(&self) -> Option<String> {
        let mut parts: SmallVec<[String; 7]> = SmallVec::new();
        let x = self.get(Property::X);
        let y = self.get(Property::Y);
        if x.is_some() || y.is_some() {
            parts.push(format!(
                "translate({}px, {}px)",
                x.unwrap_or(0.0),
                y.unwrap_or(0.0)
            ));
        }
        if let Some(s) = self.get(Property::Scale) {
            parts.push(format!("scale({})", s));
        }
        if let Some(s) = self.get(Property::ScaleX) {
            parts.push(format!("scaleX({})", s));
        }
        if let Some(r) = self.get(Property::Rotate) {
            parts.push(format!("rotate({}deg)", r));
        }
        if let Some(r) = self.get(Property::RotateX) {
            parts.push(format!("rotateX({}deg)", r));
        }
        if let Some(r) = self.get(Property::RotateY) {
            parts.push(format!("rotateY({}deg)", r));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Every CSS declaration this style produces, as (property, value) pairs.
    pub fn css_declarations(&self) -> SmallVec<[(&'static str, String); 4]> {
        let mut out = SmallVec::new();
        if let Some(t) = self.transform_css() {
            out.push(("transform", t));
        }
        if let Some(o) = self.get(Property::Opacity) {
            out.push(("opacity", format!("{}", o)));
        }
        if let Some(w) = self.get(Property::WidthPx) {
            out.push(("width", format!("{}px", w)));
        }
        if let Some(d) = self.get(Property::StrokeDashoffset) {
            out.push(("stroke-dashoffset", format!("{}", d)));
        }
        out
    }
}
